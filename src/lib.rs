//! protoc-gen-xorm library
//!
//! This crate provides the code generation logic for giving protobuf Go
//! enums xorm storage conversions (`FromDB`, `ToDB` and `Value`).

#![deny(warnings)]
#![deny(missing_docs)]

pub mod codegen;
pub mod generator;
pub mod options;
pub mod registry;
pub mod types;

use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Invalid plugin configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The proto files in the request could not be loaded into a registry
    #[error("Failed to load proto files: {0}")]
    RegistryError(String),

    /// A file listed in `file_to_generate` is not part of the request
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// General code generation failure
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to decode protobuf message
    #[error("Decode error: {0}")]
    DecodeError(String),
}

/// Generate xorm enum conversions from a protobuf CodeGeneratorRequest
///
/// This is the main entry point for the code generator.
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse, GeneratorError> {
    generator::generate(request)
}

/// Generate xorm enum conversions from raw protobuf bytes
pub fn generate_from_bytes(bytes: &[u8]) -> Result<CodeGeneratorResponse, GeneratorError> {
    generator::generate_from_bytes(bytes)
}
