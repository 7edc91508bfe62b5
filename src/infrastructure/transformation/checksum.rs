//! Checksum transformation
//!
//! Digests the artifact file and attaches one checksum item per algorithm.
//! Items are named after the file as it will appear in the deployment
//! repository, so a re-run replaces rather than duplicates them.

use std::fs::File;

use tracing::debug;

use crate::domain::entities::{Artifact, ArtifactMetadata, ArtifactRepository};
use crate::domain::ports::{ArtifactTransformation, TransformationError};
use crate::domain::value_objects::ChecksumAlgorithm;

/// Attaches checksum metadata for the configured algorithms
#[derive(Debug, Clone)]
pub struct ChecksumTransformation {
    algorithms: Vec<ChecksumAlgorithm>,
}

impl ChecksumTransformation {
    pub fn new(algorithms: Vec<ChecksumAlgorithm>) -> Self {
        Self { algorithms }
    }

    pub fn algorithms(&self) -> &[ChecksumAlgorithm] {
        &self.algorithms
    }
}

impl Default for ChecksumTransformation {
    fn default() -> Self {
        Self::new(ChecksumAlgorithm::ALL.to_vec())
    }
}

impl ArtifactTransformation for ChecksumTransformation {
    fn name(&self) -> &'static str {
        "checksum"
    }

    fn transform_for_deployment(
        &self,
        artifact: &mut Artifact,
        deployment_repository: &ArtifactRepository,
        _local_repository: &ArtifactRepository,
    ) -> Result<(), TransformationError> {
        let file = artifact
            .file()
            .ok_or_else(|| TransformationError::MissingFile {
                artifact: artifact.coordinates().to_string(),
            })?
            .to_path_buf();

        let remote_path = deployment_repository.path_of(artifact);
        let target_filename = remote_path
            .rsplit('/')
            .next()
            .unwrap_or(remote_path.as_str())
            .to_string();
        let coords = artifact.coordinates().clone();

        for algorithm in &self.algorithms {
            let reader = File::open(&file).map_err(|source| TransformationError::Io {
                path: file.clone(),
                source,
            })?;
            let checksum =
                algorithm
                    .digest_reader(reader)
                    .map_err(|source| TransformationError::Io {
                        path: file.clone(),
                        source,
                    })?;
            debug!(
                artifact = %coords,
                algorithm = %algorithm,
                checksum = checksum.hex(),
                "Computed checksum"
            );
            artifact.add_metadata(ArtifactMetadata::checksum(
                &coords,
                target_filename.clone(),
                checksum,
            ));
        }
        Ok(())
    }
}
