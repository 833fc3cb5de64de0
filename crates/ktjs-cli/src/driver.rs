use anyhow::{Context, Result};
use ktjs_common::Diagnostic;
use ktjs_emitter::{
    BindingContext, IRPrinter, Namer, NamerOptions, TranslationContext, TranslationError,
    translate_files,
};
use std::io::Write;
use std::path::Path;

use crate::args::CliArgs;
use crate::config::resolve_namer_options;
use crate::manifest::Manifest;

#[derive(Debug, Clone, Default)]
pub struct CompilationResult {
    /// Generated JavaScript; empty when `diagnostics` is not
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationResult {
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Load the manifest and config named by `args` and translate.
pub fn compile(args: &CliArgs) -> Result<CompilationResult> {
    let options = resolve_namer_options(args)?;
    let manifest = Manifest::load(&args.manifest)?;
    translate_manifest(manifest, options)
}

/// Run the package declaration pass over `manifest`.
///
/// A failure attributed to a file becomes a diagnostic; any other failure of
/// the pass is returned as an error.
#[tracing::instrument(level = "debug", skip_all, fields(files = manifest.files.len()))]
pub fn translate_manifest(manifest: Manifest, options: NamerOptions) -> Result<CompilationResult> {
    let files = manifest.into_source_files()?;
    let binding = BindingContext::bind_by_module(&files);
    let mut context = TranslationContext::new(&binding, Namer::new(options));

    match translate_files(&files, &mut context) {
        Ok(statements) => Ok(CompilationResult {
            output: IRPrinter::print_statements(&statements),
            diagnostics: Vec::new(),
        }),
        Err(TranslationError::Diagnostic(diagnostic)) => {
            tracing::debug!(file = %diagnostic.file_name, "translation failed");
            Ok(CompilationResult {
                output: String::new(),
                diagnostics: vec![diagnostic.to_diagnostic()],
            })
        }
        Err(err) => Err(err).context("package declaration pass failed"),
    }
}

/// Write `output` to `out`, or to stdout when no path is given.
pub fn write_output(output: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write output to stdout")
        }
    }
}
