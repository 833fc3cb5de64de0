//! JavaScript IR produced by the package translators.
//!
//! The translators build trees of `IRNode` instead of strings; `IRPrinter`
//! walks the tree and emits JavaScript text. Declarations arrive already
//! lowered, so most of their bodies are carried as `IRNode::Raw`.
//!
//! # IR Structure
//!
//! The IR is a tree of `IRNode` variants. Each variant represents a JavaScript
//! construct (expression or statement) that can be emitted.

use crate::context::JsName;

/// Intermediate Representation node for generated JavaScript
#[derive(Debug, Clone, PartialEq)]
pub enum IRNode {
    // =========================================================================
    // Literals
    // =========================================================================
    /// Numeric literal: `42`, `3.14`
    NumericLiteral(String),

    /// String literal: `"hello"`
    StringLiteral(String),

    /// Boolean literal: `true`, `false`
    BooleanLiteral(bool),

    /// Null literal: `null`
    NullLiteral,

    /// Undefined: `void 0`
    Undefined,

    // =========================================================================
    // Identifiers
    // =========================================================================
    /// Identifier: `foo`, `_bar`
    Identifier(String),

    /// This keyword
    This,

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Binary expression: `left op right`
    BinaryExpr {
        left: Box<Self>,
        operator: String,
        right: Box<Self>,
    },

    /// Call expression: `callee(args)`
    CallExpr {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },

    /// Property access: `object.property`
    PropertyAccess { object: Box<Self>, property: String },

    /// Object literal: `{ key: value, ... }`
    ObjectLiteral {
        properties: Vec<IRProperty>,
        /// Emit one property per line
        multiline: bool,
    },

    /// Function expression: `function name(params) { body }`
    FunctionExpr {
        name: Option<String>,
        parameters: Vec<IRParam>,
        body: Vec<Self>,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    /// Variable statement: `var a = 1, b = 2;`
    VarStatement(IRVars),

    /// Expression statement: `expr;`
    ExpressionStatement(Box<Self>),

    /// Return statement: `return expr;`
    ReturnStatement(Option<Box<Self>>),

    // =========================================================================
    // Special
    // =========================================================================
    /// Raw JavaScript string (pre-lowered declarations)
    Raw(String),

    /// Comment: `/* text */` or `// text`
    Comment { text: String, is_block: bool },
}

/// Property in an object literal
#[derive(Debug, Clone, PartialEq)]
pub struct IRProperty {
    pub key: IRPropertyKey,
    pub value: IRNode,
}

/// Object property key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IRPropertyKey {
    Identifier(String),
    StringLiteral(String),
}

impl IRPropertyKey {
    /// The key text without quotes.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Identifier(name) | Self::StringLiteral(name) => name,
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct IRParam {
    pub name: String,
    pub rest: bool,
}

/// The declarations of one `var` statement.
///
/// `multiline` asks the printer to put each declaration on its own line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IRVars {
    pub vars: Vec<IRVar>,
    pub multiline: bool,
}

/// One declaration inside a `var` statement: `name = initializer`
#[derive(Debug, Clone, PartialEq)]
pub struct IRVar {
    pub name: JsName,
    pub initializer: Option<Box<IRNode>>,
}

// =========================================================================
// Builder helpers for IR construction
// =========================================================================

impl IRNode {
    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::StringLiteral(s.into())
    }

    /// Create a numeric literal
    pub fn number(n: impl Into<String>) -> Self {
        Self::NumericLiteral(n.into())
    }

    /// Create a raw JavaScript fragment
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpr {
            callee: Box::new(callee),
            arguments: args,
        }
    }

    /// Create a property access
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create an assignment expression
    pub fn assign(target: Self, value: Self) -> Self {
        Self::BinaryExpr {
            left: Box::new(target),
            operator: "=".to_string(),
            right: Box::new(value),
        }
    }

    /// Create a return statement
    pub fn ret(expr: Option<Self>) -> Self {
        Self::ReturnStatement(expr.map(Box::new))
    }

    /// Create a function expression
    pub const fn func_expr(name: Option<String>, params: Vec<IRParam>, body: Vec<Self>) -> Self {
        Self::FunctionExpr {
            name,
            parameters: params,
            body,
        }
    }

    /// Create `this` reference
    pub const fn this() -> Self {
        Self::This
    }

    /// Create an expression statement
    pub fn expr_stmt(expr: Self) -> Self {
        Self::ExpressionStatement(Box::new(expr))
    }

    /// Create a single-line object literal
    pub const fn object(props: Vec<IRProperty>) -> Self {
        Self::ObjectLiteral {
            properties: props,
            multiline: false,
        }
    }

    /// Create an object literal printed one property per line
    pub const fn object_multiline(props: Vec<IRProperty>) -> Self {
        Self::ObjectLiteral {
            properties: props,
            multiline: true,
        }
    }
}

impl IRParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: false,
        }
    }

    pub fn rest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: true,
        }
    }
}

impl IRProperty {
    /// Create a simple property with identifier key: `{ key: value }`
    pub fn init(key: impl Into<String>, value: IRNode) -> Self {
        Self {
            key: IRPropertyKey::Identifier(key.into()),
            value,
        }
    }

    /// Create a property with string literal key: `{ "key": value }`
    pub fn init_string(key: impl Into<String>, value: IRNode) -> Self {
        Self {
            key: IRPropertyKey::StringLiteral(key.into()),
            value,
        }
    }
}

impl IRVars {
    /// An empty declaration list.
    #[must_use]
    pub const fn new(multiline: bool) -> Self {
        Self {
            vars: Vec::new(),
            multiline,
        }
    }

    pub fn add(&mut self, var: IRVar) {
        self.vars.push(var);
    }

    /// Add `var` only when it carries an initializer; returns whether it was added.
    pub fn add_if_has_initializer(&mut self, var: IRVar) -> bool {
        if var.initializer.is_none() {
            return false;
        }
        self.vars.push(var);
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl IRVar {
    pub fn new(name: JsName, initializer: Option<IRNode>) -> Self {
        Self {
            name,
            initializer: initializer.map(Box::new),
        }
    }
}

/// Check if `name` can be written as a bare identifier (object key, property access).
#[must_use]
pub fn is_valid_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || first == '$' || first.is_alphabetic()) {
        return false;
    }
    chars.all(|ch| ch == '_' || ch == '$' || ch.is_alphanumeric())
}
