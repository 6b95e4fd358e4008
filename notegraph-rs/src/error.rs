//! Error types and exit codes for notegraph.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const ALREADY_EXISTS: i32 = 3;
    pub const INVALID_PATH: i32 = 4;
}

/// Main error type for notegraph operations.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Note already exists: {0}")]
    NoteAlreadyExists(PathBuf),

    #[error("Folder not found: {0}")]
    FolderNotFound(PathBuf),

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Path escapes the vault root: {0}")]
    InvalidPath(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialize error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("{0}")]
    Other(String),
}

impl VaultError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultError::NoteNotFound(_)
            | VaultError::FolderNotFound(_)
            | VaultError::VaultNotFound(_) => exit_code::NOT_FOUND,
            VaultError::NoteAlreadyExists(_) => exit_code::ALREADY_EXISTS,
            VaultError::InvalidPath(_) => exit_code::INVALID_PATH,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for notegraph operations.
pub type Result<T> = std::result::Result<T, VaultError>;
