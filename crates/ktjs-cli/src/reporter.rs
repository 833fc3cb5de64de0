use anyhow::{Context, Result};
use ktjs_common::Diagnostic;

use crate::args::DiagnosticFormat;

pub struct Reporter {
    format: DiagnosticFormat,
}

impl Reporter {
    pub const fn new(format: DiagnosticFormat) -> Self {
        Self { format }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> Result<String> {
        match self.format {
            DiagnosticFormat::Text => {
                let mut out = String::new();
                for (index, diagnostic) in diagnostics.iter().enumerate() {
                    if index > 0 {
                        out.push('\n');
                    }
                    out.push_str(&diagnostic.format());
                }
                Ok(out)
            }
            DiagnosticFormat::Json => {
                serde_json::to_string_pretty(diagnostics).context("failed to serialize diagnostics")
            }
        }
    }
}
