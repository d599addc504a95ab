//! Error type for parse and host boundaries.
//!
//! Viewer control operations never fail; these errors only surface when
//! turning strings or config into viewer types, or when a platform binding
//! refuses an operation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Unknown media type: {0}")]
    UnknownMediaType(String),

    #[error("Invalid rotation: {0} degrees (expected 0, 90, 180 or 270)")]
    InvalidRotation(u16),

    #[error("Unknown viewer command: {0}")]
    UnknownCommand(String),

    #[cfg(feature = "toml")]
    #[error("Invalid viewer config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Platform error: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
