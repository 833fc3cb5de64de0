//! IR Printer - Emits JavaScript strings from IR nodes
//!
//! This module walks IR trees produced by the package translators and emits
//! JavaScript source text. Formatting decisions that depend on the tree
//! (multi-line object literals and `var` lists) are carried by the nodes
//! themselves, so the printer never consults source text.
//!
//! # Example
//!
//! ```ignore
//! let ir = IRNode::call(IRNode::id("foo"), vec![IRNode::number("1")]);
//! assert_eq!(IRPrinter::emit_to_string(&ir), "foo(1)");
//! ```

#[path = "ir_printer_helpers.rs"]
mod ir_printer_helpers;

use crate::ir::{IRNode, IRParam, IRProperty, IRPropertyKey, IRVars, is_valid_identifier_name};
use std::fmt::Write;

/// Printer for IR nodes
pub struct IRPrinter<'a> {
    output: String,
    indent_level: u32,
    indent_str: &'a str,
}

impl<'a> IRPrinter<'a> {
    /// Create a printer with four-space indentation
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str: "    ",
        }
    }

    /// Create a printer with a custom indentation unit
    #[must_use]
    pub const fn with_indent(indent_str: &'a str) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str,
        }
    }

    /// Emit a single node and return the generated text
    #[must_use]
    pub fn emit_to_string(node: &IRNode) -> String {
        let mut printer = IRPrinter::new();
        printer.emit_node(node);
        printer.output
    }

    /// Emit top-level statements, one per line.
    ///
    /// A `var` statement with no declarations produces no text.
    #[must_use]
    pub fn print_statements(statements: &[IRNode]) -> String {
        let mut printer = IRPrinter::new();
        printer.emit_statements(statements);
        printer.finish()
    }

    /// Emit top-level statements into this printer.
    pub fn emit_statements(&mut self, statements: &[IRNode]) {
        for stmt in statements {
            if matches!(stmt, IRNode::VarStatement(vars) if vars.is_empty()) {
                continue;
            }
            self.write_indent();
            self.emit_node(stmt);
            self.write_line();
        }
    }

    /// Take the generated text
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }

    pub(crate) fn emit_node(&mut self, node: &IRNode) {
        match node {
            IRNode::NumericLiteral(n) => self.write(n),
            IRNode::StringLiteral(s) => {
                self.write("\"");
                self.write_escaped(s);
                self.write("\"");
            }
            IRNode::BooleanLiteral(b) => self.write(if *b { "true" } else { "false" }),
            IRNode::NullLiteral => self.write("null"),
            IRNode::Undefined => self.write("void 0"),
            IRNode::Identifier(name) => self.write(name),
            IRNode::This => self.write("this"),
            IRNode::BinaryExpr {
                left,
                operator,
                right,
            } => {
                self.emit_node(left);
                self.write(" ");
                self.write(operator);
                self.write(" ");
                self.emit_node(right);
            }
            IRNode::CallExpr { callee, arguments } => {
                // Function expressions in callee position need parens
                if matches!(**callee, IRNode::FunctionExpr { .. }) {
                    self.write("(");
                    self.emit_node(callee);
                    self.write(")");
                } else {
                    self.emit_node(callee);
                }
                self.write("(");
                self.emit_comma_separated(arguments);
                self.write(")");
            }
            IRNode::PropertyAccess { object, property } => {
                self.emit_node(object);
                if is_valid_identifier_name(property) {
                    self.write(".");
                    self.write(property);
                } else {
                    self.write("[\"");
                    self.write_escaped(property);
                    self.write("\"]");
                }
            }
            IRNode::ObjectLiteral {
                properties,
                multiline,
            } => {
                if *multiline {
                    self.emit_object_literal_multiline(properties);
                } else {
                    self.emit_object_literal_inline(properties);
                }
            }
            IRNode::FunctionExpr {
                name,
                parameters,
                body,
            } => {
                self.write("function ");
                if let Some(name) = name {
                    self.write(name);
                }
                self.write("(");
                self.emit_parameters(parameters);
                self.write(") ");
                self.emit_function_body(body);
            }
            IRNode::VarStatement(vars) => self.emit_var_statement(vars),
            IRNode::ExpressionStatement(expr) => {
                self.emit_node(expr);
                self.write(";");
            }
            IRNode::ReturnStatement(expr) => {
                self.write("return");
                if let Some(expr) = expr {
                    self.write(" ");
                    self.emit_node(expr);
                }
                self.write(";");
            }
            IRNode::Raw(text) => self.write(text),
            IRNode::Comment { text, is_block } => {
                if *is_block {
                    self.write("/*");
                    self.write(text);
                    self.write("*/");
                } else {
                    self.write("//");
                    self.write(text);
                }
            }
        }
    }

    fn emit_var_statement(&mut self, vars: &IRVars) {
        if vars.is_empty() {
            return;
        }
        self.write("var ");
        // Continuation lines line up one level deeper than the statement
        self.increase_indent();
        for (i, var) in vars.vars.iter().enumerate() {
            if i > 0 {
                self.write(",");
                if vars.multiline {
                    self.write_line();
                    self.write_indent();
                } else {
                    self.write(" ");
                }
            }
            self.write(var.name.as_str());
            if let Some(init) = &var.initializer {
                self.write(" = ");
                self.decrease_indent();
                self.emit_node(init);
                self.increase_indent();
            }
        }
        self.decrease_indent();
        self.write(";");
    }
}

#[cfg(test)]
#[path = "../tests/ir_printer.rs"]
mod tests;
