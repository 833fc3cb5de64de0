//! Input files handed to the backend.
//!
//! Parsing, resolution and per-declaration code generation happen before this
//! crate runs, so a `SourceFile` carries its declarations already lowered to
//! JavaScript IR.

use crate::ir::IRNode;
use ktjs_common::FqName;

/// Module name used when a file does not name one.
pub const DEFAULT_MODULE: &str = "main";

/// Identifies a file for the duration of one compilation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

/// One top-level declaration of a file, already lowered.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// A member of the package object: `name: value`
    Member { name: String, value: IRNode },
    /// A property computed when the package initializes: `this.name = initializer;`
    Property { name: String, initializer: IRNode },
    /// A statement run by the package initializer
    Initializer(IRNode),
    /// A declaration provided by the runtime; emits nothing
    Native { name: String },
}

impl Declaration {
    /// The package-object key this declaration claims, if any.
    #[must_use]
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::Member { name, .. } | Self::Property { name, .. } => Some(name),
            Self::Initializer(_) | Self::Native { .. } => None,
        }
    }
}

/// A parsed and resolved input file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub id: FileId,
    pub name: String,
    /// Package declared by the file's `package` directive
    pub package: FqName,
    /// Compilation module the file belongs to
    pub module: String,
    pub declarations: Vec<Declaration>,
}

impl SourceFile {
    pub fn new(id: FileId, name: impl Into<String>, package: FqName) -> Self {
        Self {
            id,
            name: name.into(),
            package,
            module: DEFAULT_MODULE.to_string(),
            declarations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    #[must_use]
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }
}
