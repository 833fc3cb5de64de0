//! JavaScript name scopes.
//!
//! The translation pass owns one output scope. Names are declared through it
//! so that the same identifier always maps to the same `JsName`, and so that
//! identifiers that are reserved in JavaScript never reach the output verbatim.

use crate::ir::IRNode;
use rustc_hash::FxHashMap;

/// Words that cannot be used as a `var` name in ES5 strict and sloppy code.
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "implements",
    "import", "in", "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "yield",
];

/// Check if `identifier` is a reserved word in JavaScript.
#[must_use]
pub fn is_reserved_word(identifier: &str) -> bool {
    RESERVED_WORDS.contains(&identifier)
}

/// A name bound in a `JsScope`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JsName(String);

impl JsName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An identifier expression referring to this name.
    #[must_use]
    pub fn make_ref(&self) -> IRNode {
        IRNode::id(self.0.clone())
    }
}

/// A flat output scope mapping requested identifiers to bound names.
#[derive(Debug, Clone)]
pub struct JsScope {
    description: String,
    names: FxHashMap<String, JsName>,
}

impl JsScope {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            names: FxHashMap::default(),
        }
    }

    /// Declare `identifier` in this scope.
    ///
    /// Declaring the same identifier twice returns the same name. Reserved
    /// words are bound as `identifier$`.
    pub fn declare_name(&mut self, identifier: &str) -> JsName {
        if let Some(name) = self.names.get(identifier) {
            return name.clone();
        }
        let name = if is_reserved_word(identifier) {
            JsName(format!("{identifier}$"))
        } else {
            JsName(identifier.to_string())
        };
        tracing::trace!(
            scope = %self.description,
            identifier,
            name = name.as_str(),
            "declared name"
        );
        self.names.insert(identifier.to_string(), name.clone());
        name
    }

    /// The name previously declared for `identifier`, if any.
    #[must_use]
    pub fn find_name(&self, identifier: &str) -> Option<&JsName> {
        self.names.get(identifier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
