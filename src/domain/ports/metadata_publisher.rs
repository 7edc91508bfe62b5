//! Metadata Publisher Port

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::{ArtifactMetadata, ArtifactRepository};

use super::{FsError, TransferError};

/// A metadata item could not be deployed
#[derive(Debug, Error)]
pub enum MetadataDeploymentError {
    /// Reading or writing the merge source in the local repository failed
    #[error("unable to store metadata '{key}' at {path}: {source}")]
    Store {
        key: String,
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The previously published document could not be parsed
    #[error("unable to merge metadata '{key}' with {path}: {source}")]
    Merge {
        key: String,
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// Uploading the metadata file failed
    #[error("unable to upload metadata '{key}': {source}")]
    Transfer {
        key: String,
        #[source]
        source: TransferError,
    },
}

/// Publishes one metadata item to a deployment repository
///
/// The local repository is the merge source: the item is materialized there
/// first and the local copy is what gets uploaded.
pub trait MetadataPublisher: Send + Sync {
    fn publish(
        &self,
        metadata: &ArtifactMetadata,
        local_repository: &ArtifactRepository,
        deployment_repository: &ArtifactRepository,
    ) -> Result<(), MetadataDeploymentError>;
}
