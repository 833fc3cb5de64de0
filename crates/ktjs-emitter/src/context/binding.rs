//! File → package fragment bindings.
//!
//! The front end records, for every file, the package fragment it contributes
//! to. A package fragment is the part of a package declared by one module; two
//! files of the same module and package resolve to equal fragments.

use crate::errors::TranslationError;
use crate::source::{FileId, SourceFile};
use ktjs_common::FqName;
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId(pub u32);

/// A declared package fragment. Equality and hashing are by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackageFragment {
    pub id: FragmentId,
    pub fq_name: FqName,
}

impl PackageFragment {
    pub const fn new(id: FragmentId, fq_name: FqName) -> Self {
        Self { id, fq_name }
    }
}

/// Read-only binding information produced by resolution.
#[derive(Debug, Default, Clone)]
pub struct BindingContext {
    file_to_fragment: FxHashMap<FileId, PackageFragment>,
}

impl BindingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `file` to `fragment`, returning the previous binding.
    pub fn record(&mut self, file: FileId, fragment: PackageFragment) -> Option<PackageFragment> {
        self.file_to_fragment.insert(file, fragment)
    }

    #[must_use]
    pub fn get(&self, file: FileId) -> Option<&PackageFragment> {
        self.file_to_fragment.get(&file)
    }

    /// The fragment `file` belongs to. A missing binding is an internal error.
    pub fn package_fragment(&self, file: &SourceFile) -> Result<&PackageFragment, TranslationError> {
        self.get(file.id)
            .ok_or_else(|| TranslationError::MissingPackageFragment {
                file: file.name.clone(),
            })
    }

    /// One fragment per distinct package, numbered in first-seen order.
    pub fn bind_by_package<'f>(files: impl IntoIterator<Item = &'f SourceFile>) -> Self {
        Self::bind_with(files, |file| (String::new(), file.package.clone()))
    }

    /// One fragment per distinct `(module, package)` pair, numbered in first-seen order.
    pub fn bind_by_module<'f>(files: impl IntoIterator<Item = &'f SourceFile>) -> Self {
        Self::bind_with(files, |file| (file.module.clone(), file.package.clone()))
    }

    fn bind_with<'f>(
        files: impl IntoIterator<Item = &'f SourceFile>,
        key_of: impl Fn(&SourceFile) -> (String, FqName),
    ) -> Self {
        let mut fragments: FxHashMap<(String, FqName), PackageFragment> = FxHashMap::default();
        let mut binding = Self::new();
        for file in files {
            let key = key_of(file);
            let next_id = FragmentId(fragments.len() as u32);
            let fragment = fragments
                .entry(key)
                .or_insert_with_key(|(_, fq_name)| PackageFragment::new(next_id, fq_name.clone()))
                .clone();
            binding.record(file.id, fragment);
        }
        binding
    }
}
