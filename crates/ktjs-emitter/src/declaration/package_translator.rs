//! Per-package translation.
//!
//! A `NamespaceTranslator` collects the declarations of one package fragment
//! while files are routed to it, then publishes them into the shared
//! `DefineInvocationMap` once every file has been seen. Publication consumes
//! the translator.

use super::define_invocation::{DefineInvocation, DefineInvocationMap, PackageMember};
use crate::context::{PackageFragment, TranslationContext};
use crate::errors::TranslationError;
use crate::ir::{IRNode, IRProperty};
use crate::source::{Declaration, SourceFile};
use ktjs_common::FqName;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Translates the files of one package fragment.
pub trait NamespaceTranslator {
    /// Package this translator contributes to.
    fn fq_name(&self) -> &FqName;

    /// Accumulate the declarations of `file`.
    fn translate(
        &mut self,
        file: &SourceFile,
        context: &TranslationContext<'_>,
    ) -> Result<(), TranslationError>;

    /// Publish the accumulated declarations into `invocations`.
    fn add(
        self,
        invocations: &mut DefineInvocationMap,
        context: &TranslationContext<'_>,
    ) -> Result<(), TranslationError>
    where
        Self: Sized;
}

/// Creates one translator per package fragment.
pub trait NamespaceTranslatorFactory {
    type Translator: NamespaceTranslator;

    fn create(
        &mut self,
        fragment: &PackageFragment,
        context: &TranslationContext<'_>,
    ) -> Self::Translator;
}

/// Factory for the default `PackageTranslator`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackageTranslatorFactory;

impl NamespaceTranslatorFactory for PackageTranslatorFactory {
    type Translator = PackageTranslator;

    fn create(
        &mut self,
        fragment: &PackageFragment,
        context: &TranslationContext<'_>,
    ) -> PackageTranslator {
        PackageTranslator::create(fragment, context)
    }
}

/// Default translator: turns pre-lowered declarations into package members
/// and initializer statements.
#[derive(Debug)]
pub struct PackageTranslator {
    fragment: PackageFragment,
    members: Vec<IRProperty>,
    initializer: Vec<IRNode>,
    declared: FxHashSet<String>,
    file_count: usize,
}

impl PackageTranslator {
    pub fn create(fragment: &PackageFragment, _context: &TranslationContext<'_>) -> Self {
        Self {
            fragment: fragment.clone(),
            members: Vec::new(),
            initializer: Vec::new(),
            declared: FxHashSet::default(),
            file_count: 0,
        }
    }

    /// Number of files accumulated so far.
    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    fn translate_declaration(
        &mut self,
        declaration: &Declaration,
        context: &TranslationContext<'_>,
    ) -> Result<(), TranslationError> {
        if let Some(name) = declaration.declared_name()
            && !self.declared.insert(name.to_string())
        {
            return Err(TranslationError::ConflictingDeclaration {
                package: self.fragment.fq_name.clone(),
                name: name.to_string(),
            });
        }

        match declaration {
            Declaration::Member { name, value } => {
                self.members.push(IRProperty {
                    key: context.property_key(name),
                    value: value.clone(),
                });
            }
            Declaration::Property { name, initializer } => {
                self.initializer.push(IRNode::expr_stmt(IRNode::assign(
                    IRNode::prop(IRNode::this(), name.clone()),
                    initializer.clone(),
                )));
            }
            Declaration::Initializer(statement) => self.initializer.push(statement.clone()),
            Declaration::Native { name } => {
                trace!(package = %self.fragment.fq_name, name = %name, "skipping native declaration");
            }
        }
        Ok(())
    }

    /// Register `child` in its parent's object, creating missing ancestors.
    ///
    /// Walks up from `child`: the first ancestor already present receives the
    /// entry; each absent ancestor is created holding only that entry and the
    /// walk continues from it.
    fn add_to_parent(
        child: &FqName,
        invocations: &mut DefineInvocationMap,
        context: &TranslationContext<'_>,
    ) -> Result<(), TranslationError> {
        let mut child = child.clone();
        while let Some(parent) = child.parent() {
            let entry = PackageMember::Package {
                key: context.property_key(child.short_name()),
                fq_name: child.clone(),
            };
            if let Some(parent_invocation) = invocations.get_mut(&parent) {
                return parent_invocation.add_member(entry);
            }
            trace!(package = %parent, "creating enclosing package");
            invocations.insert(DefineInvocation::create(parent.clone(), Vec::new(), vec![entry])?);
            child = parent;
        }
        Ok(())
    }
}

impl NamespaceTranslator for PackageTranslator {
    fn fq_name(&self) -> &FqName {
        &self.fragment.fq_name
    }

    fn translate(
        &mut self,
        file: &SourceFile,
        context: &TranslationContext<'_>,
    ) -> Result<(), TranslationError> {
        if file.package != self.fragment.fq_name {
            return Err(TranslationError::Assertion(format!(
                "file declares package `{}` but is bound to a fragment of `{}`",
                file.package, self.fragment.fq_name
            )));
        }
        self.file_count += 1;
        for declaration in &file.declarations {
            self.translate_declaration(declaration, context)?;
        }
        Ok(())
    }

    fn add(
        self,
        invocations: &mut DefineInvocationMap,
        context: &TranslationContext<'_>,
    ) -> Result<(), TranslationError> {
        let fq_name = self.fragment.fq_name;
        let members = self.members.into_iter().map(PackageMember::Declaration);

        if let Some(existing) = invocations.get_mut(&fq_name) {
            debug!(package = %fq_name, "merging into existing package object");
            existing.append_initializer(self.initializer);
            for member in members {
                existing.add_member(member)?;
            }
            return Ok(());
        }

        debug!(package = %fq_name, files = self.file_count, "registering package object");
        invocations.insert(DefineInvocation::create(
            fq_name.clone(),
            self.initializer,
            members.collect(),
        )?);
        Self::add_to_parent(&fq_name, invocations, context)
    }
}

#[cfg(test)]
#[path = "../../tests/package_translator_tests.rs"]
mod tests;
