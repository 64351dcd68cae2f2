//! `config.toml` in the data directory.
//!
//! ```toml
//! [clock]
//! source = "system"   # "system" | "fixed" | "unavailable"
//! fixed = 0
//! offset = 0
//!
//! [vars]
//! dir = "/sys/firmware/efi/efivars"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub vars: VarsConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    #[default]
    System,
    Fixed,
    Unavailable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockConfig {
    #[serde(default)]
    pub source: ClockKind,

    /// Reading reported by the `fixed` source.
    #[serde(default)]
    pub fixed: i64,

    /// Signed seconds added to every clock reading.
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VarsConfig {
    #[serde(default = "default_efivars_dir")]
    pub dir: PathBuf,
}

impl Default for VarsConfig {
    fn default() -> Self {
        Self {
            dir: default_efivars_dir(),
        }
    }
}

fn default_efivars_dir() -> PathBuf {
    PathBuf::from("/sys/firmware/efi/efivars")
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid config")
    }

    /// Load `config.toml` from `data_dir`; a missing file means defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}
