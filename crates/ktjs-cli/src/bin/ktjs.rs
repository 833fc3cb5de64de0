#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;

use ktjs_cli::args::CliArgs;
use ktjs_cli::{driver, reporter::Reporter};

/// Exit status when the pass reported diagnostics
const EXIT_DIAGNOSTICS: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if KTJS_LOG or RUST_LOG is set.
    // Supports KTJS_LOG_FORMAT=tree|json|text (see tracing_config.rs).
    ktjs_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let result = driver::compile(&args)?;

    if result.has_diagnostics() {
        let reporter = Reporter::new(args.diagnostics);
        eprintln!("{}", reporter.render(&result.diagnostics)?);
        std::process::exit(EXIT_DIAGNOSTICS);
    }

    driver::write_output(&result.output, args.out.as_deref())
}
