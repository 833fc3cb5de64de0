use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ktjs binary.
#[derive(Parser, Debug)]
#[command(
    name = "ktjs",
    version,
    about = "Emit the package declarations of pre-lowered Kotlin files as JavaScript"
)]
pub struct CliArgs {
    /// JSON manifest listing the input files and their lowered declarations.
    pub manifest: PathBuf,

    /// Path to a ktjs.json config file. Defaults to ktjs.json next to the manifest.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write the generated JavaScript to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Name of the top-level variable bound to the root package object.
    #[arg(long = "root-package-name", alias = "rootPackageName")]
    pub root_package_name: Option<String>,

    /// Global object exposing the Kotlin runtime library.
    #[arg(long = "kotlin-object-name", alias = "kotlinObjectName")]
    pub kotlin_object_name: Option<String>,

    /// How diagnostics are printed.
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub diagnostics: DiagnosticFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticFormat {
    /// `file: error KT9001: message`
    Text,
    /// A JSON array of diagnostic objects
    Json,
}
