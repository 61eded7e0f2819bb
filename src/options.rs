//! Plugin parameter parsing
//!
//! protoc hands the plugin everything after `--xorm_out=` (up to the `:`)
//! and every `--xorm_opt` value as one comma-separated string of
//! `key=value` pairs. Keys meant for other plugins sharing the same
//! invocation (`paths`, `M<file>`, ...) are ignored.

use crate::GeneratorError;

/// Parameter key for the Go import path prefix
const IMPORT_PREFIX_KEY: &str = "import_prefix";

/// Options controlling a single plugin invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginOptions {
    /// Prefix added to the Go package path of every proto file
    pub import_prefix: String,
}

impl PluginOptions {
    /// Parse the protoc plugin parameter string
    ///
    /// Fails only when `import_prefix` is given without a value.
    pub fn parse(parameter: &str) -> Result<Self, GeneratorError> {
        let mut options = PluginOptions::default();

        for part in parameter.split(',').map(str::trim) {
            if part.is_empty() {
                continue;
            }

            match part.split_once('=') {
                Some((key, value)) if key.trim() == IMPORT_PREFIX_KEY => {
                    options.import_prefix = value.trim().to_string();
                }
                None if part == IMPORT_PREFIX_KEY => {
                    return Err(GeneratorError::InvalidConfig(format!(
                        "{} requires a value",
                        IMPORT_PREFIX_KEY
                    )));
                }
                _ => {}
            }
        }

        Ok(options)
    }
}
