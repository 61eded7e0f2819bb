//! Read-only schema tree consumed by the code generator
//!
//! The registry flattens protobuf descriptors into these types. Code
//! generation never looks past them, so any parser that can fill them in
//! can drive the renderer.

/// Go package a generated file belongs to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoPackage {
    /// Import path, including any configured import prefix
    ///
    /// Resolved for registry parity with protoc-gen-go's package rules; the
    /// generated xorm file only uses `name`, so `import_prefix` never
    /// changes the emitted text.
    pub path: String,
    /// Package name used in the `package` clause
    pub name: String,
}

/// One proto file selected for generation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaFile {
    /// File name as given to protoc (e.g. `foo/bar.proto`)
    pub name: String,
    /// Proto package (`foo.bar`), possibly empty
    pub package: String,
    /// Resolved Go package
    pub go_package: GoPackage,
    /// Enums declared at file scope, in declaration order
    pub enums: Vec<EnumDecl>,
    /// Every message in the file, depth-first, parents before children
    pub messages: Vec<MessageDecl>,
}

/// A message declaration, possibly nested
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageDecl {
    /// Declared (unqualified) name
    pub name: String,
    /// Enclosing message names, outermost first
    pub outers: Vec<String>,
    /// True for the synthetic entry type protoc creates for a map field
    pub map_entry: bool,
    /// Enums declared directly inside this message
    pub enums: Vec<EnumDecl>,
}

impl MessageDecl {
    /// Underscore-joined name of the message including its outers
    ///
    /// `Outer.Inner` flattens to `Outer_Inner`, matching the Go type name
    /// protoc-gen-go emits for nested messages.
    pub fn flattened_name(&self) -> String {
        if self.outers.is_empty() {
            self.name.clone()
        } else {
            format!("{}_{}", self.outers.join("_"), self.name)
        }
    }
}

/// An enum declaration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumDecl {
    /// Declared (unqualified) name
    pub name: String,
}

impl EnumDecl {
    /// Create an enum declaration with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
