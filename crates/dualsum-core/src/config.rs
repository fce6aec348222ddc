use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Optional configuration read from `~/.config/dualsum/config.toml`.
///
/// Only affects diagnostics; the digest algorithm and output format are fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DualsumConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset (e.g. "debug").
    #[serde(default)]
    pub log_filter: Option<String>,
}

/// Location of an existing config file, if there is one. Never creates it.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dualsum")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Parse configuration from TOML text.
pub fn parse(data: &str) -> Result<DualsumConfig> {
    let cfg: DualsumConfig = toml::from_str(data)?;
    Ok(cfg)
}

/// Load configuration from disk, falling back to defaults if no file exists.
pub fn load() -> Result<DualsumConfig> {
    let Some(path) = config_path()? else {
        return Ok(DualsumConfig::default());
    };
    let data =
        fs::read_to_string(&path).with_context(|| format!("read config {}", path.display()))?;
    parse(&data).with_context(|| format!("parse config {}", path.display()))
}
