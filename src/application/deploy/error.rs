//! Deployment Errors
//!
//! Every failure inside a deploy surfaces as one `DeploymentError`. The
//! variant names the phase; `source()` gives the original cause.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::{
    FsError, MetadataDeploymentError, TransferError, TransformationError,
};

/// Step of the deploy sequence that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployPhase {
    Transformation,
    LocalCopy,
    Upload,
    Metadata,
}

impl fmt::Display for DeployPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployPhase::Transformation => write!(f, "transformation"),
            DeployPhase::LocalCopy => write!(f, "local copy"),
            DeployPhase::Upload => write!(f, "upload"),
            DeployPhase::Metadata => write!(f, "metadata"),
        }
    }
}

/// A deploy failed; nothing after the failing step ran
#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error("Error deploying artifact: {0}")]
    Transformation(#[from] TransformationError),

    #[error("Error deploying artifact: unable to copy into local repository at {}: {source}", target.display())]
    LocalCopy {
        target: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("Error deploying artifact: {0}")]
    Transfer(#[from] TransferError),

    #[error("Error installing artifact's metadata: {0}")]
    MetadataPublish(#[from] MetadataDeploymentError),
}

impl DeploymentError {
    pub fn phase(&self) -> DeployPhase {
        match self {
            DeploymentError::Transformation(_) => DeployPhase::Transformation,
            DeploymentError::LocalCopy { .. } => DeployPhase::LocalCopy,
            DeploymentError::Transfer(_) => DeployPhase::Upload,
            DeploymentError::MetadataPublish(_) => DeployPhase::Metadata,
        }
    }
}
