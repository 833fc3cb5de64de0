//! Well-known runtime identifiers.
//!
//! Generated code registers packages through the Kotlin runtime library object
//! (`Kotlin.defineRootPackage`, `Kotlin.definePackage`) and binds the root
//! package object to a fixed top-level name. `NamerOptions` makes each of these
//! configurable so the output can target a differently named runtime.

use crate::ir::IRNode;
use serde::{Deserialize, Serialize};

/// Configurable runtime identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamerOptions {
    /// Global object exposing the runtime library
    pub kotlin_object_name: String,
    /// Top-level variable bound to the root package object
    pub root_package_name: String,
    /// Runtime method registering the root package
    pub define_root_package: String,
    /// Runtime method registering a nested package
    pub define_package: String,
}

impl Default for NamerOptions {
    fn default() -> Self {
        Self {
            kotlin_object_name: "Kotlin".to_string(),
            root_package_name: "_".to_string(),
            define_root_package: "defineRootPackage".to_string(),
            define_package: "definePackage".to_string(),
        }
    }
}

/// Yields the well-known identifiers and method references of the output.
#[derive(Clone, Debug, Default)]
pub struct Namer {
    options: NamerOptions,
}

impl Namer {
    #[must_use]
    pub const fn new(options: NamerOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &NamerOptions {
        &self.options
    }

    /// `Kotlin`
    #[must_use]
    pub fn kotlin_object(&self) -> IRNode {
        IRNode::id(self.options.kotlin_object_name.clone())
    }

    /// `Kotlin.defineRootPackage`
    #[must_use]
    pub fn root_package_definition_method_reference(&self) -> IRNode {
        IRNode::prop(self.kotlin_object(), self.options.define_root_package.clone())
    }

    /// `Kotlin.definePackage`
    #[must_use]
    pub fn package_definition_method_reference(&self) -> IRNode {
        IRNode::prop(self.kotlin_object(), self.options.define_package.clone())
    }

    /// Name of the top-level variable holding the root package object.
    #[must_use]
    pub fn root_package_name(&self) -> &str {
        &self.options.root_package_name
    }
}
