//! Error types for stayshelf operations.
//!
//! This module defines [`StayshelfError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Store loads never fail: unreadable or malformed slots degrade to an
//!   empty list and are only logged
//! - Explicit saves, slot backends and settings loading return `StayshelfError`
//! - Command plumbing uses `anyhow::Error` (via `StayshelfError::Other`)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stayshelf operations.
#[derive(Debug, Error)]
pub enum StayshelfError {
    /// Settings file not found at an explicitly requested location.
    #[error("Settings file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A slot key that the backend cannot store under.
    #[error("Invalid slot key: {key:?}")]
    InvalidSlotKey { key: String },

    /// A list could not be serialized for its slot.
    #[error("Failed to serialize slot '{key}': {message}")]
    Serialize { key: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stayshelf operations.
pub type Result<T> = std::result::Result<T, StayshelfError>;
