//! Code generation for xorm enum conversions
//!
//! One Go file is produced per proto file. It holds a fixed header followed
//! by one block of conversion methods per enum: file-level enums first, then
//! enums nested in messages, all in declaration order.

pub mod naming;
pub mod template;

use crate::types::SchemaFile;
use crate::GeneratorError;
use naming::derive_naming;
use prost_types::compiler::code_generator_response::File;
use template::{write_enum_block, write_header, EnumBlock};

/// Suffix replacing the `.proto` extension of generated files
pub const OUTPUT_SUFFIX: &str = ".pb.xorm.go";

/// Generate the response file for one proto file
pub fn generate_file(file: &SchemaFile) -> Result<File, GeneratorError> {
    Ok(File {
        name: Some(output_file_name(&file.name)),
        content: Some(render_file(file)?),
        ..Default::default()
    })
}

/// Collect the conversion blocks of a file in emission order
///
/// Map-entry messages are skipped along with anything declared in them.
/// Distinct messages that flatten to the same Go name are not detected;
/// their blocks are all emitted.
pub fn enum_blocks(file: &SchemaFile) -> Vec<EnumBlock> {
    let top_level = file.enums.iter().map(|e| {
        let naming = derive_naming(&e.name);
        EnumBlock {
            enum_name: naming.symbol,
            prefix: naming.prefix,
        }
    });

    let nested = file
        .messages
        .iter()
        .filter(|m| !m.map_entry)
        .flat_map(|m| {
            let scope = m.flattened_name();
            m.enums.iter().map(move |e| {
                let naming = derive_naming(&e.name);
                EnumBlock {
                    enum_name: format!("{}_{}", scope, naming.symbol),
                    prefix: naming.prefix,
                }
            })
        });

    top_level.chain(nested).collect()
}

/// Render the complete Go source for one proto file
pub fn render_file(file: &SchemaFile) -> Result<String, GeneratorError> {
    let mut out = String::new();
    write_header(&mut out, &file.name, &file.go_package.name).map_err(render_error)?;

    for block in enum_blocks(file) {
        write_enum_block(&mut out, &block).map_err(render_error)?;
    }

    Ok(out)
}

/// Output file name: the input name with its extension replaced
///
/// `foo/bar.proto` becomes `foo/bar.pb.xorm.go`. Only an extension in the
/// final path component is replaced.
pub fn output_file_name(input: &str) -> String {
    let base_start = input.rfind('/').map(|i| i + 1).unwrap_or(0);
    let base = match input[base_start..].rfind('.') {
        Some(dot) => &input[..base_start + dot],
        None => input,
    };
    format!("{}{}", base, OUTPUT_SUFFIX)
}

fn render_error(e: std::fmt::Error) -> GeneratorError {
    GeneratorError::CodeGenError(format!("failed to render template: {}", e))
}
