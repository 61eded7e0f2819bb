//! Request/response orchestration
//!
//! Parameter and registry failures are reported to protoc through the
//! response's `error` field. Anything that goes wrong after the registry is
//! loaded aborts the whole run: protoc gets either every file or none.

use crate::codegen;
use crate::options::PluginOptions;
use crate::registry::Registry;
use crate::GeneratorError;
use prost::Message;
use prost_types::compiler::code_generator_response::Feature;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

/// Generate one Go file per requested proto file
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse, GeneratorError> {
    let options = match PluginOptions::parse(request.parameter()) {
        Ok(options) => options,
        Err(e) => return Ok(error_response(&e)),
    };

    let registry = match Registry::load(request.proto_file, &options) {
        Ok(registry) => registry,
        Err(e) => return Ok(error_response(&e)),
    };

    let targets = request
        .file_to_generate
        .iter()
        .map(|name| registry.lookup_file(name))
        .collect::<Result<Vec<_>, _>>()?;

    let file = targets
        .iter()
        .map(codegen::generate_file)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CodeGeneratorResponse {
        file,
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    })
}

/// Decode a CodeGeneratorRequest and generate from it
pub fn generate_from_bytes(bytes: &[u8]) -> Result<CodeGeneratorResponse, GeneratorError> {
    let request = CodeGeneratorRequest::decode(bytes)
        .map_err(|e| GeneratorError::DecodeError(e.to_string()))?;
    generate(request)
}

fn error_response(err: &GeneratorError) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        error: Some(err.to_string()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::{EnumDescriptorProto, EnumValueDescriptorProto, FileDescriptorProto};

    #[test]
    fn test_empty_request() {
        let response = generate(CodeGeneratorRequest::default()).unwrap();
        assert!(response.error.is_none());
        assert!(response.file.is_empty());
        assert_eq!(response.supported_features, Some(1));
    }

    #[test]
    fn test_bad_parameter_is_reported_in_response() {
        let request = CodeGeneratorRequest {
            parameter: Some("import_prefix".to_string()),
            ..Default::default()
        };
        let response = generate(request).unwrap();
        assert!(response.file.is_empty());
        assert!(response.error.unwrap().contains("import_prefix"));
    }

    #[test]
    fn test_foreign_parameters_still_generate() {
        let file = FileDescriptorProto {
            name: Some("p/colors.proto".to_string()),
            package: Some("p".to_string()),
            enum_type: vec![EnumDescriptorProto {
                name: Some("Color".to_string()),
                value: vec![EnumValueDescriptorProto {
                    name: Some("COLOR_RED".to_string()),
                    number: Some(0),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            syntax: Some("proto3".to_string()),
            ..Default::default()
        };
        let request = CodeGeneratorRequest {
            parameter: Some("paths=source_relative,Mp/colors.proto=example.com/p".to_string()),
            file_to_generate: vec!["p/colors.proto".to_string()],
            proto_file: vec![file],
            ..Default::default()
        };

        let response = generate(request).unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.file.len(), 1);
        assert!(response.file[0]
            .content
            .as_deref()
            .unwrap()
            .contains("func (x *Color) FromDB(bytes []byte) error {"));
    }

    #[test]
    fn test_generate_from_invalid_bytes() {
        let err = generate_from_bytes(&[0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, GeneratorError::DecodeError(_)));
    }
}
