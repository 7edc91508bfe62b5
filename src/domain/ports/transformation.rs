//! Artifact Transformation Port
//!
//! A transformation runs before anything is copied or uploaded and may add or
//! replace metadata items on the artifact, or point it at a different file.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::{Artifact, ArtifactRepository};

/// Transformation failure
#[derive(Debug, Error)]
pub enum TransformationError {
    /// The transformation needs the artifact file but none is attached
    #[error("artifact {artifact} has no file attached")]
    MissingFile { artifact: String },

    /// Reading the artifact file failed
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact cannot be deployed in its current form
    #[error("artifact {artifact} rejected: {reason}")]
    Rejected { artifact: String, reason: String },
}

/// Pre-deployment mutation of an artifact
pub trait ArtifactTransformation: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn transform_for_deployment(
        &self,
        artifact: &mut Artifact,
        deployment_repository: &ArtifactRepository,
        local_repository: &ArtifactRepository,
    ) -> Result<(), TransformationError>;
}
