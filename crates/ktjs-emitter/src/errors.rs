//! Translation errors.
//!
//! `TranslationDiagnostic` is the file-tagged failure raised by the package
//! declaration pass. Everything else in `TranslationError` is a raw failure:
//! raised during accumulation it gets wrapped into a diagnostic for the current
//! file; raised anywhere else it aborts the pass as-is.

use crate::source::{FileId, SourceFile};
use ktjs_common::FqName;
use ktjs_common::diagnostics::{
    Diagnostic, diagnostic_codes, diagnostic_messages, format_message,
};
use thiserror::Error;

/// A translation failure attributed to one input file.
#[derive(Debug, Error)]
#[error("failed to translate `{file_name}`: {cause}")]
pub struct TranslationDiagnostic {
    pub file_id: FileId,
    pub file_name: String,
    #[source]
    pub cause: Box<TranslationError>,
}

impl TranslationDiagnostic {
    pub fn new(file: &SourceFile, cause: TranslationError) -> Self {
        Self {
            file_id: file.id,
            file_name: file.name.clone(),
            cause: Box::new(cause),
        }
    }

    /// Convert into a driver-facing diagnostic.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (template, code) = match &*self.cause {
            TranslationError::Assertion(_) => (
                diagnostic_messages::INTERNAL_ASSERTION_FAILED,
                diagnostic_codes::INTERNAL_ASSERTION_FAILED,
            ),
            TranslationError::ConflictingDeclaration { package, name } => {
                let package = package.to_string();
                let message = format_message(
                    diagnostic_messages::CONFLICTING_DECLARATION,
                    &[package.as_str(), name.as_str()],
                );
                return Diagnostic::error(
                    &self.file_name,
                    message,
                    diagnostic_codes::CONFLICTING_DECLARATION,
                );
            }
            _ => (
                diagnostic_messages::TRANSLATION_FAILED,
                diagnostic_codes::TRANSLATION_FAILED,
            ),
        };
        Diagnostic::error(
            &self.file_name,
            format_message(template, &[self.file_name.as_str()]),
            code,
        )
        .with_related(self.cause.to_string())
    }
}

/// Failures inside the backend.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Already attributed to a file; never wrapped again
    #[error(transparent)]
    Diagnostic(#[from] TranslationDiagnostic),

    /// An internal invariant did not hold
    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("{0}")]
    Runtime(String),

    #[error("conflicting declarations of `{name}` in package `{package}`")]
    ConflictingDeclaration { package: FqName, name: String },

    #[error("no package fragment is bound to file `{file}`")]
    MissingPackageFragment { file: String },
}

impl TranslationError {
    /// Attribute this failure to `file` unless it already is a diagnostic.
    #[must_use]
    pub fn tag_with_file(self, file: &SourceFile) -> TranslationDiagnostic {
        match self {
            Self::Diagnostic(diagnostic) => diagnostic,
            other => TranslationDiagnostic::new(file, other),
        }
    }

    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(self, Self::Diagnostic(_))
    }
}

#[cfg(test)]
#[path = "../tests/errors_tests.rs"]
mod tests;
