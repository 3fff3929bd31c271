//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/tagtree/tagtree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `TAGTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::DomainError;
use crate::visitor::{Order, VisitorKind};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("environment: {0}")]
    Environment(#[from] config::ConfigError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Unified configuration for tagtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Traversal order used when none is given on the command line
    pub order: Order,
    /// Visitor used when none is given on the command line
    pub visitor: VisitorKind,
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub order: Option<Order>,
    pub visitor: Option<VisitorKind>,
}

/// Get the XDG config directory for tagtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tagtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tagtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ConfigResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// A key absent from the environment is `None`; any other lookup error propagates.
fn env_value(config: &Config, key: &str) -> ConfigResult<Option<String>> {
    match config.get_string(key) {
        Ok(val) => Ok(Some(val)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            order: overlay.order.unwrap_or(self.order),
            visitor: overlay.visitor.unwrap_or(self.visitor),
        }
    }

    /// Load settings with layered precedence, reading the process environment.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        Self::load_layers(global_config_path().as_deref(), explicit, None)
    }

    /// Load settings from the given layers.
    ///
    /// Missing global files are skipped; a missing explicit file is an error.
    /// `env` replaces the process environment when given (keys like `TAGTREE_ORDER`).
    #[instrument(level = "debug", skip(env))]
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> ConfigResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("Loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = explicit {
            debug!("Loading config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current, env)?;

        Ok(current)
    }

    /// Apply TAGTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<config::Map<String, String>>,
    ) -> ConfigResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TAGTREE")
                    .prefix_separator("_")
                    .source(env),
            )
            .build()?;

        if let Some(val) = env_value(&config, "order")? {
            settings.order = val.parse()?;
        }
        if let Some(val) = env_value(&config, "visitor")? {
            settings.visitor = val.parse()?;
        }

        Ok(settings)
    }

    /// Render as TOML, as it would appear in a config file.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
