//! Optional TOML configuration passed with `--config`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::args::DEFAULT_COUNT;

/// FizzBuzz configuration (TOML).
///
/// Missing fields fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FizzBuzzConfig {
    /// Count used when no positional argument or `--count` is given.
    pub default_count: i64,
}

impl Default for FizzBuzzConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COUNT,
        }
    }
}

impl FizzBuzzConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_count <= 0 {
            return Err(anyhow!("default_count must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FizzBuzzConfig::default()`.
pub fn load_config(path: &Path) -> Result<FizzBuzzConfig> {
    if !path.exists() {
        return Ok(FizzBuzzConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FizzBuzzConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &FizzBuzzConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, buf)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
