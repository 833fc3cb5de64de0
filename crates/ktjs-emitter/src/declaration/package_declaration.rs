//! Package declaration pass.
//!
//! Groups the input files by package fragment, routes each file to the
//! translator of its fragment, publishes every translator in first-seen order
//! and binds the resulting root package object to one top-level variable:
//!
//! ```javascript
//! var _ = Kotlin.defineRootPackage(null, {
//!     foo: Kotlin.definePackage(null, {
//!         bar: function () { }
//!     })
//! });
//! ```

use super::define_invocation::{DefineInvocation, DefineInvocationMap};
use super::package_translator::{
    NamespaceTranslator, NamespaceTranslatorFactory, PackageTranslatorFactory,
};
use crate::context::{PackageFragment, TranslationContext};
use crate::errors::TranslationError;
use crate::ir::{IRNode, IRVar, IRVars};
use crate::source::SourceFile;
use indexmap::IndexMap;
use indexmap::map::Entry;
use ktjs_common::FqName;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Translate `files` with the default package translator.
///
/// Returns a single `var` statement binding the root package object.
pub fn translate_files<'f>(
    files: impl IntoIterator<Item = &'f SourceFile>,
    context: &mut TranslationContext<'_>,
) -> Result<Vec<IRNode>, TranslationError> {
    PackageDeclarationTranslator::new(PackageTranslatorFactory).translate(files, context)
}

/// Insert the root package record unless one exists already.
///
/// Returns whether a record was inserted.
pub fn create_root_package_define_invocation_if_needed(
    invocations: &mut DefineInvocationMap,
) -> Result<bool, TranslationError> {
    if invocations.contains(&FqName::ROOT) {
        return Ok(false);
    }
    invocations.insert(DefineInvocation::create(FqName::ROOT, Vec::new(), Vec::new())?);
    Ok(true)
}

/// Runs one package declaration pass.
///
/// Holds one translator per package fragment, in the order the fragments were
/// first seen.
pub struct PackageDeclarationTranslator<F: NamespaceTranslatorFactory> {
    factory: F,
    fragment_to_translator: FxIndexMap<PackageFragment, F::Translator>,
}

impl<F: NamespaceTranslatorFactory> PackageDeclarationTranslator<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            fragment_to_translator: FxIndexMap::default(),
        }
    }

    /// Translate `files` in the order given.
    ///
    /// A failure while translating a file is reported as a diagnostic for
    /// that file. Failures resolving a file's fragment or publishing the
    /// translators abort the pass unchanged.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn translate<'f>(
        mut self,
        files: impl IntoIterator<Item = &'f SourceFile>,
        context: &mut TranslationContext<'_>,
    ) -> Result<Vec<IRNode>, TranslationError> {
        let mut invocations = DefineInvocationMap::new();

        for file in files {
            let fragment = context.binding_context().package_fragment(file)?;

            let translator = match self.fragment_to_translator.entry(fragment.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    create_root_package_define_invocation_if_needed(&mut invocations)?;
                    debug!(
                        package = %fragment.fq_name,
                        fragment = fragment.id.0,
                        "creating package translator"
                    );
                    let translator = self.factory.create(entry.key(), context);
                    entry.insert(translator)
                }
            };

            trace!(file = %file.name, package = %fragment.fq_name, "translating file");
            translator
                .translate(file, context)
                .map_err(|err| err.tag_with_file(file))?;
        }

        debug!(
            translators = self.fragment_to_translator.len(),
            "publishing package translators"
        );
        for translator in self.fragment_to_translator.into_values() {
            translator.add(&mut invocations, context)?;
        }

        let mut vars = IRVars::new(true);
        vars.add_if_has_initializer(root_package_declaration(&invocations, context)?);
        Ok(vec![IRNode::VarStatement(vars)])
    }
}

/// `_ = Kotlin.defineRootPackage(<initializer>, <members>)`, or just `_` when
/// no root package was registered.
fn root_package_declaration(
    invocations: &DefineInvocationMap,
    context: &mut TranslationContext<'_>,
) -> Result<IRVar, TranslationError> {
    let namer = context.namer();
    let initializer = match invocations.get(&FqName::ROOT) {
        Some(root) => Some(IRNode::call(
            namer.root_package_definition_method_reference(),
            root.as_list(invocations, namer)?,
        )),
        None => None,
    };
    let root_package_name = namer.root_package_name().to_string();
    let name = context.scope_mut().declare_name(&root_package_name);
    Ok(IRVar::new(name, initializer))
}

#[cfg(test)]
#[path = "../../tests/package_declaration_tests.rs"]
mod tests;
