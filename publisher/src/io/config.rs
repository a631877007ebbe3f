//! Loading `publish.toml` from the site sources.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::config::PublishConfig;

/// File name looked up in the source directory.
pub const CONFIG_FILE: &str = "publish.toml";

/// Load config from a TOML file.
///
/// If the file is missing, returns `PublishConfig::default()`.
pub fn load_config(path: &Path) -> Result<PublishConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        let cfg = PublishConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PublishConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}
