//! Error types for mk

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mk operations
pub type Result<T> = std::result::Result<T, MkError>;

/// Main error type for mk
#[derive(Error, Debug)]
pub enum MkError {
    /// The positional file argument does not exist
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The stylesheet passed to --add-style does not exist
    #[error("CSS file does not exist: {}", .0.display())]
    StyleNotFound(PathBuf),

    /// Standard input could not be read or was not valid UTF-8
    #[error("Could not read from standard input")]
    StdinUnreadable,

    /// Locator construction errors
    #[error("Could not build URL scheme: {0}")]
    Locator(#[from] LocatorError),

    /// Errors from the operating system capabilities
    #[error("{0}")]
    System(#[from] SystemError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Invalid configuration in '{path}': {error}")]
    Invalid { path: PathBuf, error: String },
}

/// Errors raised while turning a request into a locator
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocatorError {
    #[error("invalid URL scheme '{0}'")]
    InvalidScheme(String),
}

/// Errors from the injected system capabilities
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("Failed to open '{locator}': {error}")]
    Open { locator: String, error: String },

    #[error("Named clipboards are not supported on this platform")]
    ClipboardUnsupported,

    #[error("Failed to write to clipboard '{name}': {error}")]
    Clipboard { name: String, error: String },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for locator operations
pub type LocatorResult<T> = std::result::Result<T, LocatorError>;

/// Specialized result type for system capability operations
pub type SystemResult<T> = std::result::Result<T, SystemError>;
