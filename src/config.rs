//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dtree/dtree.toml`
//! 3. Explicit config file passed with `--config`

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Settings controlling how the demonstrations are printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Symbol repeated to draw the rule between demonstrations
    pub rule_symbol: String,
    /// Number of symbols in the rule
    pub rule_width: usize,
    /// Also print the sample tree as a box-drawing diagram
    pub render_tree: bool,
    /// Colored section headers
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rule_symbol: "#".into(),
            rule_width: 60,
            render_tree: false,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub rule_symbol: Option<String>,
    pub rule_width: Option<usize>,
    pub render_tree: Option<bool>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for dtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            debug!("loading config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current.validate()?;
        Ok(current)
    }

    /// Load only the given file on top of the defaults, ignoring the global config.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let settings = Self::default().merge_with(&load_raw_settings(path)?);
        settings.validate()?;
        Ok(settings)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            rule_symbol: overlay
                .rule_symbol
                .clone()
                .unwrap_or_else(|| self.rule_symbol.clone()),
            rule_width: overlay.rule_width.unwrap_or(self.rule_width),
            render_tree: overlay.render_tree.unwrap_or(self.render_tree),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rule_symbol.is_empty() {
            return Err(ConfigError::Invalid {
                key: "rule_symbol",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Rule line printed between demonstrations.
    pub fn rule(&self) -> String {
        self.rule_symbol.repeat(self.rule_width)
    }
}
