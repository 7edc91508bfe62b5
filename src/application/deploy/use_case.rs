//! Deploy Use Case
//!
//! Orchestrates the deployment of one artifact:
//! 1. Enrich the deployment repository from the session
//! 2. Run the transformation
//! 3. Copy the source into the local repository
//! 4. Upload the source to the deployment repository
//! 5. Publish every metadata item, stopping at the first failure
//!
//! Each step runs only if the previous one succeeded. This use case is pure
//! orchestration; uploading, transforming and publishing live behind ports.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Artifact, ArtifactRepository, Session};
use crate::domain::ports::{
    ArtifactTransformation, FileSystem, MetadataPublisher, RemoteUploader, RepositorySystem,
    TransportListener,
};
use crate::domain::services::{RepositoryAuthenticator, TransferListenerAdapter};

use super::error::DeploymentError;
use super::local_cache::{LocalCacheSync, LocalCacheSynchronizer};

/// Source file used by the legacy entry point: `basedir/final_name.<extension>`
pub fn legacy_source_path(basedir: &Path, final_name: &str, artifact: &Artifact) -> PathBuf {
    basedir.join(format!("{}.{}", final_name, artifact.handler().extension()))
}

/// Deploy use case - publishes an artifact and its metadata
///
/// Collaborators are injected at construction, so any uploader, publisher or
/// transformation (including test doubles) can be plugged in.
pub struct DeployUseCase<FS>
where
    FS: FileSystem,
{
    authenticator: RepositoryAuthenticator,
    transformation: Box<dyn ArtifactTransformation>,
    local_cache: LocalCacheSynchronizer<FS>,
    uploader: Arc<dyn RemoteUploader>,
    metadata_publisher: Arc<dyn MetadataPublisher>,
}

impl<FS> DeployUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(
        file_system: FS,
        repository_system: Arc<dyn RepositorySystem>,
        transformation: Box<dyn ArtifactTransformation>,
        uploader: Arc<dyn RemoteUploader>,
        metadata_publisher: Arc<dyn MetadataPublisher>,
    ) -> Self {
        Self {
            authenticator: RepositoryAuthenticator::new(repository_system),
            transformation,
            local_cache: LocalCacheSynchronizer::new(file_system),
            uploader,
            metadata_publisher,
        }
    }

    /// Deploy `source` as `artifact`
    ///
    /// `artifact` is transformed in place, so after the call its metadata list
    /// holds whatever the transformation added. `deployment_repository` is
    /// never modified; session proxy and credentials go into a private copy.
    pub fn deploy(
        &self,
        source: &Path,
        artifact: &mut Artifact,
        deployment_repository: &ArtifactRepository,
        local_repository: &ArtifactRepository,
        session: Option<&Session>,
    ) -> Result<(), DeploymentError> {
        let coords = artifact.coordinates().clone();

        let result = self.run(
            source,
            artifact,
            deployment_repository,
            local_repository,
            session,
        );

        match &result {
            Ok(()) => info!(
                artifact = %coords,
                repository = deployment_repository.id(),
                metadata = artifact.metadata().len(),
                "Deployed artifact"
            ),
            Err(e) => warn!(
                artifact = %coords,
                repository = deployment_repository.id(),
                phase = %e.phase(),
                error = %e,
                "Deployment failed"
            ),
        }
        result
    }

    /// Legacy entry point: deploys `basedir/final_name.<extension>`
    pub fn deploy_from_basedir(
        &self,
        basedir: &Path,
        final_name: &str,
        artifact: &mut Artifact,
        deployment_repository: &ArtifactRepository,
        local_repository: &ArtifactRepository,
        session: Option<&Session>,
    ) -> Result<(), DeploymentError> {
        let source = legacy_source_path(basedir, final_name, artifact);
        self.deploy(
            &source,
            artifact,
            deployment_repository,
            local_repository,
            session,
        )
    }

    fn run(
        &self,
        source: &Path,
        artifact: &mut Artifact,
        deployment_repository: &ArtifactRepository,
        local_repository: &ArtifactRepository,
        session: Option<&Session>,
    ) -> Result<(), DeploymentError> {
        let coords = artifact.coordinates().clone();

        let deployment_repository = self.authenticator.enrich(deployment_repository, session);

        debug!(
            artifact = %coords,
            transformation = self.transformation.name(),
            "Transforming artifact"
        );
        self.transformation.transform_for_deployment(
            artifact,
            &deployment_repository,
            local_repository,
        )?;

        match self.local_cache.sync(source, local_repository, artifact) {
            Ok(LocalCacheSync::Copied { target, bytes }) => debug!(
                artifact = %coords,
                target = %target.display(),
                bytes,
                "Copied into local repository"
            ),
            Ok(LocalCacheSync::Unchanged { target }) => debug!(
                artifact = %coords,
                target = %target.display(),
                "Source already in local repository"
            ),
            Err(source) => {
                return Err(DeploymentError::LocalCopy {
                    target: self.local_cache.target_for(local_repository, artifact),
                    source,
                })
            }
        }

        debug!(
            artifact = %coords,
            repository = %deployment_repository,
            "Uploading artifact"
        );
        let listener = TransferListenerAdapter::adapt(session);
        self.uploader.put_artifact(
            source,
            artifact,
            &deployment_repository,
            listener.as_ref().map(|l| l as &dyn TransportListener),
        )?;

        for metadata in artifact.metadata() {
            debug!(artifact = %coords, metadata = %metadata.key(), "Publishing metadata");
            self.metadata_publisher
                .publish(metadata, local_repository, &deployment_repository)?;
        }

        Ok(())
    }
}
