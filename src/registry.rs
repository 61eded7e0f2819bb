//! Schema registry backed by prost-reflect
//!
//! Every proto file in the request (targets and their imports) is loaded
//! into one [`DescriptorPool`], which resolves cross-file references and
//! rejects malformed descriptors. Target files are then looked up by name
//! and flattened into the [`SchemaFile`] tree the code generator walks.

use crate::options::PluginOptions;
use crate::types::{EnumDecl, GoPackage, MessageDecl, SchemaFile};
use crate::GeneratorError;
use prost_reflect::{DescriptorPool, FileDescriptor, MessageDescriptor};
use prost_types::FileDescriptorProto;

/// Lookup-by-name registry over the proto files of one request
#[derive(Debug)]
pub struct Registry {
    pool: DescriptorPool,
    import_prefix: String,
}

impl Registry {
    /// Load all proto files of a request
    ///
    /// Fails if any file references a type or import that is not part of
    /// `files`, or if a descriptor is otherwise invalid.
    pub fn load(
        files: Vec<FileDescriptorProto>,
        options: &PluginOptions,
    ) -> Result<Self, GeneratorError> {
        let mut pool = DescriptorPool::new();
        pool.add_file_descriptor_protos(files)
            .map_err(|e| GeneratorError::RegistryError(e.to_string()))?;

        Ok(Registry {
            pool,
            import_prefix: options.import_prefix.clone(),
        })
    }

    /// Look up a loaded file by the name protoc gave it
    pub fn lookup_file(&self, name: &str) -> Result<SchemaFile, GeneratorError> {
        let file = self
            .pool
            .get_file_by_name(name)
            .ok_or_else(|| GeneratorError::FileNotFound(name.to_string()))?;

        let mut messages = Vec::new();
        for message in file.messages() {
            register_message(&mut messages, &[], &message);
        }

        Ok(SchemaFile {
            name: file.name().to_string(),
            package: file.package_name().to_string(),
            go_package: self.go_package(&file),
            enums: file.enums().map(|e| EnumDecl::new(e.name())).collect(),
            messages,
        })
    }

    /// Resolve the Go package of a file
    fn go_package(&self, file: &FileDescriptor) -> GoPackage {
        let go_package = file
            .file_descriptor_proto()
            .options
            .as_ref()
            .and_then(|o| o.go_package.as_deref())
            .filter(|p| !p.is_empty());

        resolve_go_package(file.name(), file.package_name(), go_package, &self.import_prefix)
    }
}

/// Append `message` and, unless it is a map entry, its nested messages
fn register_message(out: &mut Vec<MessageDecl>, outers: &[String], message: &MessageDescriptor) {
    let decl = MessageDecl {
        name: message.name().to_string(),
        outers: outers.to_vec(),
        map_entry: message.is_map_entry(),
        enums: message
            .child_enums()
            .map(|e| EnumDecl::new(e.name()))
            .collect(),
    };
    let map_entry = decl.map_entry;
    out.push(decl);

    if map_entry {
        return;
    }

    let mut nested_outers = outers.to_vec();
    nested_outers.push(message.name().to_string());
    for nested in message.child_messages() {
        register_message(out, &nested_outers, &nested);
    }
}

/// Compute import path and package name for a proto file
///
/// `go_package` may be `path;name`, a plain import path whose last segment
/// is the name, or a bare name. Without it the path is the file's directory
/// and the name comes from the proto package (or the file stem).
fn resolve_go_package(
    file_name: &str,
    proto_package: &str,
    go_package: Option<&str>,
    import_prefix: &str,
) -> GoPackage {
    let (path, name) = match go_package {
        Some(gp) if gp.contains('/') => match gp.rsplit_once(';') {
            Some((path, name)) => (path.to_string(), name.to_string()),
            None => (
                gp.to_string(),
                gp.rsplit('/').next().unwrap_or(gp).to_string(),
            ),
        },
        Some(gp) => {
            let name = gp.rsplit_once(';').map(|(_, n)| n).unwrap_or(gp);
            (join_prefix(import_prefix, dir_name(file_name)), name.to_string())
        }
        None => {
            let name = if proto_package.is_empty() {
                file_stem(file_name)
            } else {
                proto_package
            };
            (join_prefix(import_prefix, dir_name(file_name)), name.to_string())
        }
    };

    GoPackage {
        path,
        name: sanitize_package_name(&name),
    }
}

fn dir_name(file_name: &str) -> &str {
    match file_name.rfind('/') {
        Some(0) => "/",
        Some(idx) => &file_name[..idx],
        None => ".",
    }
}

fn file_stem(file_name: &str) -> &str {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    match base.rfind('.') {
        Some(idx) => &base[..idx],
        None => base,
    }
}

fn join_prefix(prefix: &str, dir: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        dir.to_string()
    } else if dir == "." {
        prefix.to_string()
    } else {
        format!("{}/{}", prefix, dir)
    }
}

fn sanitize_package_name(name: &str) -> String {
    name.replace(['.', '-'], "_")
}
