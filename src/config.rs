//! Configuration for covergen
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Project config (./covergen.toml)
//! 3. User config (~/.config/covergen/config.toml)
//! 4. Built-in defaults (lowest priority)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CovergenResult;

/// Project config filename looked up in the working directory
pub const CONFIG_FILE: &str = "covergen.toml";

/// Runtime configuration, passed explicitly into each component
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for .docx templates
    pub templates_dir: PathBuf,

    /// Directory where exported PDFs land (must already exist)
    pub outputs_dir: PathBuf,

    /// Explicit converter executable; auto-discovered when unset
    pub converter: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("Templates"),
            outputs_dir: PathBuf::from("Outputs"),
            converter: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CovergenResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Locate and load configuration: project file first, then user
    /// config dir, then defaults. A malformed file falls back to defaults
    /// rather than aborting.
    pub fn discover() -> Self {
        let local = PathBuf::from(CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local).unwrap_or_default();
        }

        if let Some(user) = dirs::config_dir().map(|d| d.join("covergen").join("config.toml")) {
            if user.is_file() {
                return Self::load(&user).unwrap_or_default();
            }
        }

        Self::default()
    }
}
