use anyhow::{Context, Result, bail};
use ktjs_emitter::NamerOptions;
use ktjs_emitter::context::is_reserved_word;
use ktjs_emitter::ir::is_valid_identifier_name;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::args::CliArgs;

/// Config file looked up next to the manifest when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "ktjs.json";

/// Contents of a `ktjs.json` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KtjsConfig {
    /// Runtime identifiers used by the generated code
    pub namer: NamerOptions,
}

pub fn parse_config(source: &str) -> Result<KtjsConfig> {
    let config = serde_json::from_str(source).context("failed to parse ktjs.json")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<KtjsConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// The config file to load: `--config` when given, otherwise a `ktjs.json`
/// sitting next to the manifest.
pub fn resolve_config_path(args: &CliArgs) -> Result<Option<PathBuf>> {
    if let Some(path) = &args.config {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
        return Ok(Some(path.clone()));
    }

    let candidate = args
        .manifest
        .parent()
        .map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), |dir| dir.join(CONFIG_FILE_NAME));
    Ok(candidate.is_file().then_some(candidate))
}

/// Namer options from the config file with command-line overrides applied.
pub fn resolve_namer_options(args: &CliArgs) -> Result<NamerOptions> {
    let mut options = match resolve_config_path(args)? {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading config");
            load_config(&path)?.namer
        }
        None => NamerOptions::default(),
    };
    apply_cli_overrides(&mut options, args);
    validate_namer_options(&options)?;
    Ok(options)
}

/// Reject runtime names that would not print as JavaScript identifiers.
///
/// A reserved root package name is accepted; the scope binds it as `name$`.
pub fn validate_namer_options(options: &NamerOptions) -> Result<()> {
    if !is_valid_identifier_name(&options.root_package_name) {
        bail!(
            "invalid root package name `{}`: not a JavaScript identifier",
            options.root_package_name
        );
    }
    if !is_valid_identifier_name(&options.kotlin_object_name)
        || is_reserved_word(&options.kotlin_object_name)
    {
        bail!(
            "invalid Kotlin object name `{}`: not a JavaScript identifier",
            options.kotlin_object_name
        );
    }
    Ok(())
}

pub fn apply_cli_overrides(options: &mut NamerOptions, args: &CliArgs) {
    if let Some(name) = &args.root_package_name {
        options.root_package_name.clone_from(name);
    }
    if let Some(name) = &args.kotlin_object_name {
        options.kotlin_object_name.clone_from(name);
    }
}
