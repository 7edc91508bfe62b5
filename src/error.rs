//! Error types for the deployer
//!
//! Uses `thiserror` for library errors. Deployment failures have their own
//! taxonomy in `application::deploy::DeploymentError`; this type covers the
//! surrounding surface (settings, coordinates, repository locations).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deployer operations
pub type DeployerResult<T> = Result<T, DeployerError>;

/// Main error type for everything outside the deploy pipeline itself
#[derive(Error, Debug)]
pub enum DeployerError {
    /// Coordinates string could not be parsed
    #[error("invalid artifact coordinates '{input}': {reason}")]
    InvalidCoordinates { input: String, reason: String },

    /// Repository location is not a valid URL or directory
    #[error("invalid repository location '{location}': {reason}")]
    InvalidRepository { location: String, reason: String },

    /// Settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// Settings file not found at an explicitly requested path
    #[error("settings file not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
