//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (nothing configured)
//! 2. Global config: `$XDG_CONFIG_HOME/bazaar/bazaar.toml`
//! 3. Environment variables: `BAZAAR_*` prefix
//! 4. Command-line flags (`--target`, `--user`, `--password`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::Endpoint;

/// Endpoint settings for the Bazaar API.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Bazaar API base URL
    pub target: Option<String>,
    /// Basic-auth user
    pub user: Option<String>,
    /// Basic-auth password
    pub password: Option<String>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("target", &self.target)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Get the XDG config directory for bazaar.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bazaar").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bazaar.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into Settings.
fn load_file(path: &Path) -> Result<Settings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins field by field where it has a value.
    pub fn merge_with(&self, overlay: &Settings) -> Self {
        Self {
            target: overlay.target.clone().or_else(|| self.target.clone()),
            user: overlay.user.clone().or_else(|| self.user.clone()),
            password: overlay.password.clone().or_else(|| self.password.clone()),
        }
    }

    /// Load settings from the global config file and the process environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_with(global_config_path().as_deref(), None)
    }

    /// Load settings from an explicit config file and environment source.
    ///
    /// # Arguments
    /// * `config_file` - TOML file to read; skipped when absent or missing
    /// * `env` - Environment map to use instead of the process environment
    pub fn load_with(
        config_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                debug!("loading config file {}", path.display());
                current = current.merge_with(&load_file(path)?);
            }
        }

        current = current.merge_with(&Self::from_env(env)?);
        Ok(current)
    }

    /// Read `BAZAAR_*` variables.
    fn from_env(env: Option<config::Map<String, String>>) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BAZAAR")
                    .ignore_empty(true)
                    .source(env),
            )
            .build()
            .map_err(config_err)?;

        Ok(Self {
            target: config.get_string("target").ok(),
            user: config.get_string("user").ok(),
            password: config.get_string("password").ok(),
        })
    }

    /// Resolve the API endpoint; a target must be configured.
    pub fn endpoint(&self) -> Result<Endpoint, ApplicationError> {
        let target = self
            .target
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApplicationError::Config {
                message: "no target configured (use --target or BAZAAR_TARGET)".into(),
            })?;
        Ok(Endpoint::new(target, self.user.clone(), self.password.clone())?)
    }
}
