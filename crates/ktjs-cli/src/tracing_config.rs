//! Tracing configuration for debugging the package declaration pass.
//!
//! Supports three output formats controlled by `KTJS_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Which translator each file was routed to
//! KTJS_LOG=debug KTJS_LOG_FORMAT=tree ktjs manifest.json
//!
//! # Every declaration and scope name
//! KTJS_LOG=ktjs_emitter=trace ktjs manifest.json
//!
//! # JSON for tooling
//! KTJS_LOG=debug KTJS_LOG_FORMAT=json ktjs manifest.json
//! ```
//!
//! The subscriber is only installed when `KTJS_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `KTJS_LOG_FORMAT` value. Unknown values select `Text`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("KTJS_LOG_FORMAT").unwrap_or_default())
    }
}

/// `KTJS_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("KTJS_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `KTJS_LOG` nor `RUST_LOG` is set. All output goes
/// to stderr so it never mixes with JavaScript written to stdout.
pub fn init_tracing() {
    if std::env::var_os("KTJS_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
