//! Translation context shared by the translators of one pass.
//!
//! - `binding` - file → package fragment resolution
//! - `scope` - output name scope
//! - `namer` - well-known runtime identifiers

mod binding;
mod namer;
mod scope;

pub use binding::{BindingContext, FragmentId, PackageFragment};
pub use namer::{Namer, NamerOptions};
pub use scope::{JsName, JsScope, is_reserved_word};

use crate::ir::{IRPropertyKey, is_valid_identifier_name};

/// Per-pass state handed to every translator.
///
/// The binding context and namer are read-only for the pass; the scope is
/// mutated when the root package variable is declared.
pub struct TranslationContext<'a> {
    binding_context: &'a BindingContext,
    scope: JsScope,
    namer: Namer,
}

impl<'a> TranslationContext<'a> {
    pub fn new(binding_context: &'a BindingContext, namer: Namer) -> Self {
        Self {
            binding_context,
            scope: JsScope::new("root"),
            namer,
        }
    }

    #[must_use]
    pub const fn binding_context(&self) -> &'a BindingContext {
        self.binding_context
    }

    #[must_use]
    pub const fn scope(&self) -> &JsScope {
        &self.scope
    }

    pub const fn scope_mut(&mut self) -> &mut JsScope {
        &mut self.scope
    }

    #[must_use]
    pub const fn namer(&self) -> &Namer {
        &self.namer
    }

    /// Key under which `name` is stored in a package object.
    ///
    /// Names that are not valid identifiers are quoted.
    #[must_use]
    pub fn property_key(&self, name: &str) -> IRPropertyKey {
        if is_valid_identifier_name(name) {
            IRPropertyKey::Identifier(name.to_string())
        } else {
            IRPropertyKey::StringLiteral(name.to_string())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/context_tests.rs"]
mod tests;
