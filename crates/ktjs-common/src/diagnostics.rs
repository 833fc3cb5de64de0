//! Diagnostic types reported by the translator to the driver.
//!
//! Translation diagnostics carry no source span: by the time the backend runs,
//! the front end has already validated the input, so a failure here names the
//! offending file and the underlying cause.

use serde::Serialize;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// Diagnostic codes raised by the JavaScript backend.
pub mod diagnostic_codes {
    /// A file failed to translate.
    pub const TRANSLATION_FAILED: u32 = 9001;
    /// An internal invariant of the backend was violated while translating a file.
    pub const INTERNAL_ASSERTION_FAILED: u32 = 9002;
    /// Two declarations claim the same name in one package object.
    pub const CONFLICTING_DECLARATION: u32 = 9003;
}

/// Message templates; `{0}`, `{1}` are filled by `format_message`.
pub mod diagnostic_messages {
    pub const TRANSLATION_FAILED: &str = "Failed to translate file '{0}'.";
    pub const INTERNAL_ASSERTION_FAILED: &str = "Internal error while translating file '{0}'.";
    pub const CONFLICTING_DECLARATION: &str = "Conflicting declarations of '{1}' in package '{0}'.";
}

/// A diagnostic message attached to an input file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    /// Messages from the causes of this diagnostic, outermost first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_information: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(file: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self {
            file: file.into(),
            message_text: message.into(),
            category: DiagnosticCategory::Error,
            code,
            related_information: Vec::new(),
        }
    }

    /// Add a related message to this diagnostic.
    #[must_use]
    pub fn with_related(mut self, message: impl Into<String>) -> Self {
        self.related_information.push(message.into());
        self
    }

    /// Render as `file: error KT9001: message`, one related message per line.
    #[must_use]
    pub fn format(&self) -> String {
        let category = match self.category {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        };
        let mut out = format!("{}: {category} KT{}: {}", self.file, self.code, self.message_text);
        for related in &self.related_information {
            out.push_str("\n  caused by: ");
            out.push_str(related);
        }
        out
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
