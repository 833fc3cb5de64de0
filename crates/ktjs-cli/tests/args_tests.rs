use clap::Parser;
use std::path::Path;

use super::args::{CliArgs, DiagnosticFormat};

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["ktjs", "manifest.json"]).expect("default args should parse");

    assert_eq!(args.manifest, Path::new("manifest.json"));
    assert!(args.config.is_none());
    assert!(args.out.is_none());
    assert!(args.root_package_name.is_none());
    assert!(args.kotlin_object_name.is_none());
    assert_eq!(args.diagnostics, DiagnosticFormat::Text);
}

#[test]
fn parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "ktjs",
        "--config",
        "conf/ktjs.json",
        "-o",
        "out.js",
        "--root-package-name",
        "pkg",
        "--kotlin-object-name",
        "KRuntime",
        "--diagnostics",
        "JSON",
        "build/manifest.json",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.config.as_deref(), Some(Path::new("conf/ktjs.json")));
    assert_eq!(args.out.as_deref(), Some(Path::new("out.js")));
    assert_eq!(args.root_package_name.as_deref(), Some("pkg"));
    assert_eq!(args.kotlin_object_name.as_deref(), Some("KRuntime"));
    assert_eq!(args.diagnostics, DiagnosticFormat::Json);
    assert_eq!(args.manifest, Path::new("build/manifest.json"));
}

#[test]
fn requires_a_manifest() {
    assert!(CliArgs::try_parse_from(["ktjs"]).is_err());
}

#[test]
fn rejects_unknown_diagnostic_format() {
    assert!(CliArgs::try_parse_from(["ktjs", "--diagnostics", "xml", "m.json"]).is_err());
}
