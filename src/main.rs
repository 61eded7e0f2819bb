//! protoc-gen-xorm - A protoc plugin for generating xorm enum conversions
//!
//! This binary reads a CodeGeneratorRequest from stdin and writes a
//! CodeGeneratorResponse to stdout, following the protoc plugin protocol.

use prost::Message;
use std::io::{self, Read, Write};

fn main() {
    if let Err(e) = run() {
        eprintln!("protoc-gen-xorm: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf)?;

    // Registry and parameter errors are carried in response.error;
    // missing targets and render errors return Err here.
    let response = protoc_gen_xorm::generate_from_bytes(&buf)?;

    if std::env::var("XORM_DEBUG").is_ok() {
        eprintln!("[protoc-gen-xorm] Generated {} files", response.file.len());
        for f in &response.file {
            eprintln!(
                "[protoc-gen-xorm]   - {}",
                f.name.as_deref().unwrap_or("<unnamed>")
            );
        }
        if let Some(ref err) = response.error {
            eprintln!("[protoc-gen-xorm] Error: {}", err);
        }
    }

    let mut out = Vec::new();
    response.encode(&mut out)?;
    io::stdout().write_all(&out)?;

    Ok(())
}
