//! Error types for meshportal operations.
//!
//! This module defines [`PortalError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! Probe-level failures (a service manager that is missing, a command that is
//! not on PATH) are never errors — they are folded into the tri-state health
//! result so one bad check can never block rendering of the others. Only
//! configuration loading and directory scanning return `Result`.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for meshportal operations.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Downloads directory could not be read.
    #[error("Cannot read downloads directory {path}: {message}")]
    DirectoryUnreadable { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for meshportal operations.
pub type Result<T> = std::result::Result<T, PortalError>;
