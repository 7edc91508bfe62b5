//! Artifact Deployer - publish build artifacts to Maven-layout repositories
//!
//! Deploys one artifact file and its metadata (checksums, version pointers)
//! into a deployment repository, keeping the local repository in step and
//! applying proxy and credential settings from the session.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployUseCase, DeploymentError};
pub use config::Settings;
pub use domain::entities::{Artifact, ArtifactMetadata, ArtifactRepository, Session};
pub use domain::value_objects::ArtifactCoordinates;
pub use error::{DeployerError, DeployerResult};
