//! Input manifest.
//!
//! The manifest stands in for the front end: it lists every file of the
//! compilation with its package, its module and its declarations already
//! lowered to JavaScript text.
//!
//! ```json
//! { "files": [ { "name": "a.kt", "package": "foo.bar", "module": "main",
//!                "declarations": [
//!                  { "kind": "member", "name": "f", "value": "function () { }" },
//!                  { "kind": "property", "name": "x", "initializer": "1" },
//!                  { "kind": "initializer", "statement": "console.log(1);" },
//!                  { "kind": "native", "name": "ext" } ] } ] }
//! ```

use anyhow::{Context, Result};
use ktjs_common::FqName;
use ktjs_emitter::source::DEFAULT_MODULE;
use ktjs_emitter::{Declaration, FileId, IRNode, SourceFile};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestFile {
    pub name: String,
    /// Dotted package name; omitted or empty for the root package
    #[serde(default)]
    pub package: FqName,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub declarations: Vec<ManifestDeclaration>,
}

/// A lowered declaration. JavaScript snippets are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum ManifestDeclaration {
    Member { name: String, value: String },
    Property { name: String, initializer: String },
    Initializer { statement: String },
    Native { name: String },
}

impl From<ManifestDeclaration> for Declaration {
    fn from(declaration: ManifestDeclaration) -> Self {
        match declaration {
            ManifestDeclaration::Member { name, value } => Self::Member {
                name,
                value: IRNode::raw(value),
            },
            ManifestDeclaration::Property { name, initializer } => Self::Property {
                name,
                initializer: IRNode::raw(initializer),
            },
            ManifestDeclaration::Initializer { statement } => {
                Self::Initializer(IRNode::raw(statement))
            }
            ManifestDeclaration::Native { name } => Self::Native { name },
        }
    }
}

impl Manifest {
    pub fn parse(source: &str) -> Result<Self> {
        let manifest = serde_json::from_str(source).context("failed to parse manifest JSON")?;
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    /// Source files in manifest order; each file's id is its position.
    pub fn into_source_files(self) -> Result<Vec<SourceFile>> {
        self.files
            .into_iter()
            .enumerate()
            .map(|(index, file)| {
                let id = u32::try_from(index).with_context(|| {
                    format!("too many files in manifest: `{}` is file #{index}", file.name)
                })?;
                let mut source = SourceFile::new(FileId(id), file.name, file.package)
                    .with_module(file.module.unwrap_or_else(|| DEFAULT_MODULE.to_string()));
                source
                    .declarations
                    .extend(file.declarations.into_iter().map(Declaration::from));
                Ok(source)
            })
            .collect()
    }
}
