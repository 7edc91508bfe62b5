//! Remote Uploader Port
//!
//! Moves files into a deployment repository. Timeouts and retries, if any,
//! belong to the implementation.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::{Artifact, ArtifactMetadata, ArtifactRepository};

use super::TransportListener;

/// Upload failure
#[derive(Debug, Error)]
pub enum TransferError {
    /// Reading the source or writing the destination failed
    #[error("failed to transfer {resource} to {repository}: {source}")]
    Failed {
        resource: String,
        repository: String,
        #[source]
        source: std::io::Error,
    },

    /// The repository URL uses a protocol this uploader cannot speak
    #[error("no transport available for protocol '{protocol}' (repository {repository})")]
    UnsupportedProtocol {
        protocol: String,
        repository: String,
    },

    /// The remote refused the credentials
    #[error("not authorized to deploy to {repository}")]
    Unauthorized { repository: String },

    /// The remote refused the upload for another reason
    #[error("{repository} rejected {resource}: {reason}")]
    Rejected {
        resource: String,
        repository: String,
        reason: String,
    },
}

/// Trait for uploading files to a deployment repository
pub trait RemoteUploader: Send + Sync {
    /// Upload `source` as `artifact` into `repository`
    fn put_artifact(
        &self,
        source: &Path,
        artifact: &Artifact,
        repository: &ArtifactRepository,
        listener: Option<&dyn TransportListener>,
    ) -> Result<(), TransferError>;

    /// Upload the local copy of a metadata item into `repository`
    fn put_artifact_metadata(
        &self,
        source: &Path,
        metadata: &ArtifactMetadata,
        repository: &ArtifactRepository,
    ) -> Result<(), TransferError>;
}
