//! Repository Metadata Publisher
//!
//! Stores each metadata item in the local repository first, then uploads
//! that local copy. Version pointers are stored under a per-remote name
//! (`maven-metadata-<id>.xml`) so pointers for different remotes coexist.
//!
//! Before storing, a version pointer is merged with what is already
//! published: the remote document for `file:` repositories, otherwise the
//! local copy from an earlier deploy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{join_relative, ArtifactMetadata, ArtifactRepository, MetadataKind};
use crate::domain::ports::{FileSystem, MetadataDeploymentError, MetadataPublisher, RemoteUploader};

/// Publishes metadata through the local repository
pub struct RepositoryMetadataPublisher<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    uploader: Arc<dyn RemoteUploader>,
}

impl<FS> RepositoryMetadataPublisher<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, uploader: Arc<dyn RemoteUploader>) -> Self {
        Self {
            file_system,
            uploader,
        }
    }

    /// Where `metadata` is stored locally when published to `deployment_repository`
    pub fn local_path(
        metadata: &ArtifactMetadata,
        local_repository: &ArtifactRepository,
        deployment_repository: &ArtifactRepository,
    ) -> PathBuf {
        join_relative(
            &local_repository.basedir(),
            &local_repository.path_of_local_metadata(metadata, deployment_repository),
        )
    }

    /// The published document to merge with, if there is one
    fn published_document(
        &self,
        metadata: &ArtifactMetadata,
        local_path: &Path,
        deployment_repository: &ArtifactRepository,
    ) -> Option<PathBuf> {
        if deployment_repository.protocol() == "file" {
            let remote = join_relative(
                &deployment_repository.basedir(),
                &deployment_repository.path_of_remote_metadata(metadata),
            );
            if self.file_system.exists(&remote) {
                return Some(remote);
            }
        }
        self.file_system
            .exists(local_path)
            .then(|| local_path.to_path_buf())
    }

    fn merge(
        &self,
        metadata: &ArtifactMetadata,
        local_path: &Path,
        deployment_repository: &ArtifactRepository,
    ) -> Result<ArtifactMetadata, MetadataDeploymentError> {
        if !matches!(metadata.kind(), MetadataKind::VersionPointer { .. }) {
            return Ok(metadata.clone());
        }
        let Some(published) =
            self.published_document(metadata, local_path, deployment_repository)
        else {
            return Ok(metadata.clone());
        };

        let bytes = self
            .file_system
            .read(&published)
            .map_err(|source| MetadataDeploymentError::Store {
                key: metadata.key(),
                path: published.clone(),
                source,
            })?;
        let merged = metadata
            .merged_with(&String::from_utf8_lossy(&bytes))
            .map_err(|source| MetadataDeploymentError::Merge {
                key: metadata.key(),
                path: published.clone(),
                source,
            })?;
        debug!(metadata = %metadata.key(), path = %published.display(), "Merged with published metadata");
        Ok(merged)
    }
}

impl<FS> MetadataPublisher for RepositoryMetadataPublisher<FS>
where
    FS: FileSystem,
{
    fn publish(
        &self,
        metadata: &ArtifactMetadata,
        local_repository: &ArtifactRepository,
        deployment_repository: &ArtifactRepository,
    ) -> Result<(), MetadataDeploymentError> {
        let path = Self::local_path(metadata, local_repository, deployment_repository);
        let merged = self.merge(metadata, &path, deployment_repository)?;

        self.file_system
            .write(&path, merged.content().as_bytes())
            .map_err(|source| MetadataDeploymentError::Store {
                key: metadata.key(),
                path: path.clone(),
                source,
            })?;
        debug!(metadata = %metadata.key(), path = %path.display(), "Stored metadata locally");

        self.uploader
            .put_artifact_metadata(&path, &merged, deployment_repository)
            .map_err(|source| MetadataDeploymentError::Transfer {
                key: metadata.key(),
                source,
            })
    }
}
