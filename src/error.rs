//! Error types for docview

use thiserror::Error;

/// Result type alias for docview operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Viewer error types
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Cannot write config file: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("No highlighting rules for language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown theme: {0} (expected 'light' or 'dark')")]
    UnknownTheme(String),

    #[error("{0}")]
    Message(String),
}
