//! Common types and utilities for the ktjs Kotlin-to-JavaScript backend.
//!
//! This crate provides foundational types used across all ktjs crates:
//! - Fully qualified package names (`FqName`)
//! - Diagnostics reported to the driver (`Diagnostic`, `DiagnosticCategory`)

// Fully qualified package names
pub mod fq_name;
pub use fq_name::FqName;

// Diagnostic types and codes
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
