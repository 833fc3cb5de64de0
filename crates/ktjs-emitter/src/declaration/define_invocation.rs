//! Package registration records.
//!
//! Every package object is created at runtime by a define call:
//!
//! ```javascript
//! var _ = Kotlin.defineRootPackage(null, {
//!     foo: Kotlin.definePackage(function () {
//!         this.answer = 42;
//!     }, {
//!         bar: Kotlin.definePackage(null, {})
//!     })
//! });
//! ```
//!
//! A `DefineInvocation` holds the two arguments of one such call: the package
//! initializer and the members of the package object. Nested packages are kept
//! as references into the `DefineInvocationMap` and only materialized when the
//! argument list is rendered, so a package may keep receiving members after its
//! parent's entry for it was created.

use crate::context::Namer;
use crate::errors::TranslationError;
use crate::ir::{IRNode, IRProperty, IRPropertyKey};
use ktjs_common::FqName;
use rustc_hash::{FxHashMap, FxHashSet};

/// An entry of a package object.
#[derive(Debug, Clone, PartialEq)]
pub enum PackageMember {
    /// A declaration: `key: value`
    Declaration(IRProperty),
    /// A nested package: `key: Kotlin.definePackage(...)`
    Package { key: IRPropertyKey, fq_name: FqName },
}

impl PackageMember {
    #[must_use]
    pub const fn key(&self) -> &IRPropertyKey {
        match self {
            Self::Declaration(property) => &property.key,
            Self::Package { key, .. } => key,
        }
    }
}

/// Arguments of the define call registering one package.
#[derive(Debug, Clone)]
pub struct DefineInvocation {
    fq_name: FqName,
    initializer: Vec<IRNode>,
    members: Vec<PackageMember>,
    keys: FxHashSet<String>,
}

impl DefineInvocation {
    /// Create the record for `fq_name`.
    ///
    /// `initializer` holds the statements of the package initializer; when it
    /// is empty the call receives `null`. The members object is always printed
    /// one member per line.
    pub fn create(
        fq_name: FqName,
        initializer: Vec<IRNode>,
        members: Vec<PackageMember>,
    ) -> Result<Self, TranslationError> {
        let mut invocation = Self {
            fq_name,
            initializer,
            members: Vec::with_capacity(members.len()),
            keys: FxHashSet::default(),
        };
        for member in members {
            invocation.add_member(member)?;
        }
        Ok(invocation)
    }

    #[must_use]
    pub const fn fq_name(&self) -> &FqName {
        &self.fq_name
    }

    #[must_use]
    pub fn members(&self) -> &[PackageMember] {
        &self.members
    }

    #[must_use]
    pub fn initializer(&self) -> &[IRNode] {
        &self.initializer
    }

    /// Append a member; its key must be new to this package object.
    pub fn add_member(&mut self, member: PackageMember) -> Result<(), TranslationError> {
        let key = member.key().name();
        if !self.keys.insert(key.to_string()) {
            return Err(TranslationError::ConflictingDeclaration {
                package: self.fq_name.clone(),
                name: key.to_string(),
            });
        }
        self.members.push(member);
        Ok(())
    }

    /// Append statements to the package initializer.
    pub fn append_initializer(&mut self, statements: impl IntoIterator<Item = IRNode>) {
        self.initializer.extend(statements);
    }

    /// The argument list of the define call: `[initializer, members]`.
    ///
    /// Nested package entries are resolved through `invocations`.
    pub fn as_list(
        &self,
        invocations: &DefineInvocationMap,
        namer: &Namer,
    ) -> Result<Vec<IRNode>, TranslationError> {
        let initializer = if self.initializer.is_empty() {
            IRNode::NullLiteral
        } else {
            IRNode::func_expr(None, Vec::new(), self.initializer.clone())
        };

        let mut properties = Vec::with_capacity(self.members.len());
        for member in &self.members {
            match member {
                PackageMember::Declaration(property) => properties.push(property.clone()),
                PackageMember::Package { key, fq_name } => {
                    let nested = invocations.get(fq_name).ok_or_else(|| {
                        TranslationError::Assertion(format!(
                            "package `{fq_name}` is referenced by `{}` but was never registered",
                            self.fq_name
                        ))
                    })?;
                    properties.push(IRProperty {
                        key: key.clone(),
                        value: IRNode::call(
                            namer.package_definition_method_reference(),
                            nested.as_list(invocations, namer)?,
                        ),
                    });
                }
            }
        }

        Ok(vec![initializer, IRNode::object_multiline(properties)])
    }
}

/// Registration records of one pass, keyed by package name.
#[derive(Debug, Default)]
pub struct DefineInvocationMap {
    invocations: FxHashMap<FqName, DefineInvocation>,
}

impl DefineInvocationMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, fq_name: &FqName) -> Option<&DefineInvocation> {
        self.invocations.get(fq_name)
    }

    pub fn get_mut(&mut self, fq_name: &FqName) -> Option<&mut DefineInvocation> {
        self.invocations.get_mut(fq_name)
    }

    #[must_use]
    pub fn contains(&self, fq_name: &FqName) -> bool {
        self.invocations.contains_key(fq_name)
    }

    /// Insert `invocation` under its own package name, returning the record it replaced.
    pub fn insert(&mut self, invocation: DefineInvocation) -> Option<DefineInvocation> {
        self.invocations.insert(invocation.fq_name.clone(), invocation)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/define_invocation_tests.rs"]
mod tests;
