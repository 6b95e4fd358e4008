//! Vault location configuration.

use crate::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured vault root.
pub const VAULT_ENV_VAR: &str = "NOTEGRAPH_VAULT";

/// Persistent configuration, read from `config.toml` in the user config
/// directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default vault root used when no flag or environment override is given.
    #[serde(default)]
    pub vault: Option<PathBuf>,
}

impl Config {
    /// Load the config file if present; an absent file is an empty config.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => {
                let raw = std::fs::read_to_string(&path)?;
                let config = toml::from_str(&raw).map_err(|e| {
                    VaultError::ConfigError(format!("{}: {}", path.display(), e))
                })?;
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Location of the config file (`<config dir>/notegraph/config.toml`).
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notegraph").join("config.toml"))
    }

    /// Default vault root when nothing is configured: `~/notes`.
    pub fn default_vault_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notes")
    }

    /// Resolve the vault root: CLI flag, then the environment variable, then
    /// the config file, then the documented default under the home directory.
    pub fn resolve_vault_path(&self, cli_vault: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_vault {
            return path.to_path_buf();
        }
        if let Some(path) = std::env::var_os(VAULT_ENV_VAR) {
            return PathBuf::from(path);
        }
        if let Some(ref path) = self.vault {
            return path.clone();
        }
        Self::default_vault_path()
    }
}
