//! JavaScript backend for the ktjs compiler: package declaration translation.
//!
//! This crate is organized into several modules:
//! - `source` - Input files with pre-lowered declarations
//! - `context` - `TranslationContext` (bindings, scope, namer)
//! - `declaration` - The package declaration pass and per-package translators
//! - `ir` / `ir_printer` - JavaScript IR and its printer
//! - `errors` - Translation errors and file-tagged diagnostics

pub mod context;
pub mod declaration;
pub mod errors;
pub mod ir;
pub mod ir_printer;
pub mod source;

pub use context::{BindingContext, Namer, NamerOptions, TranslationContext};
pub use declaration::translate_files;
pub use errors::{TranslationDiagnostic, TranslationError};
pub use ir::IRNode;
pub use ir_printer::IRPrinter;
pub use source::{Declaration, FileId, SourceFile};
