//! Transformation chain

use tracing::trace;

use crate::domain::entities::{Artifact, ArtifactRepository};
use crate::domain::ports::{ArtifactTransformation, TransformationError};

/// Runs transformations in insertion order, stopping at the first failure
///
/// An empty chain leaves the artifact untouched.
#[derive(Default)]
pub struct TransformationChain {
    transformations: Vec<Box<dyn ArtifactTransformation>>,
}

impl TransformationChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, transformation: impl ArtifactTransformation + 'static) -> Self {
        self.transformations.push(Box::new(transformation));
        self
    }

    pub fn push(&mut self, transformation: Box<dyn ArtifactTransformation>) {
        self.transformations.push(transformation);
    }

    pub fn len(&self) -> usize {
        self.transformations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }
}

impl ArtifactTransformation for TransformationChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn transform_for_deployment(
        &self,
        artifact: &mut Artifact,
        deployment_repository: &ArtifactRepository,
        local_repository: &ArtifactRepository,
    ) -> Result<(), TransformationError> {
        for transformation in &self.transformations {
            trace!(transformation = transformation.name(), "Applying transformation");
            transformation.transform_for_deployment(
                artifact,
                deployment_repository,
                local_repository,
            )?;
        }
        Ok(())
    }
}
