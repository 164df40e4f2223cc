//! # Error Types
//!
//! This module defines error types used throughout the halftonist library.

use thiserror::Error;

/// Main error type for halftonist operations
#[derive(Debug, Error)]
pub enum HalftoneError {
    /// Malformed pixel buffer or dimensions
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Allocation failed (image too large for a raster surface)
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Configuration value out of range or unparseable
    #[error("Config error: {0}")]
    Config(String),

    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON config parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, HalftoneError>;
