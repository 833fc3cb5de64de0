//! Package declaration translation.
//!
//! - `package_declaration` - the pass over all files of a compilation
//! - `package_translator` - per-fragment accumulation and publication
//! - `define_invocation` - package registration records

pub mod define_invocation;
pub mod package_declaration;
pub mod package_translator;

pub use define_invocation::{DefineInvocation, DefineInvocationMap, PackageMember};
pub use package_declaration::{
    PackageDeclarationTranslator, create_root_package_define_invocation_if_needed,
    translate_files,
};
pub use package_translator::{
    NamespaceTranslator, NamespaceTranslatorFactory, PackageTranslator, PackageTranslatorFactory,
};
