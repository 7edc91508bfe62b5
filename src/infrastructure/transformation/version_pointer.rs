//! Version pointer transformation

use crate::domain::entities::{Artifact, ArtifactMetadata, ArtifactRepository};
use crate::domain::ports::{ArtifactTransformation, TransformationError};

/// Points `latest` (and `release`, for non-snapshots) at the deployed version
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionPointerTransformation;

impl VersionPointerTransformation {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactTransformation for VersionPointerTransformation {
    fn name(&self) -> &'static str {
        "version-pointer"
    }

    fn transform_for_deployment(
        &self,
        artifact: &mut Artifact,
        _deployment_repository: &ArtifactRepository,
        _local_repository: &ArtifactRepository,
    ) -> Result<(), TransformationError> {
        let coords = artifact.coordinates().clone();
        let release = (!coords.is_snapshot()).then(|| coords.version());
        artifact.add_metadata(ArtifactMetadata::version_pointer(
            &coords,
            coords.version(),
            release,
        ));
        Ok(())
    }
}
