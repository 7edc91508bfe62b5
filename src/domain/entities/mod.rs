//! Domain Entities
//!
//! - `Artifact` - the unit being published, with its metadata list
//! - `ArtifactMetadata` - checksums and version pointers
//! - `ArtifactRepository` - local cache or remote deployment target
//! - `Session` - optional request-scoped network configuration

mod artifact;
mod metadata;
mod repository;
mod session;

pub use artifact::{Artifact, ArtifactHandler};
pub use metadata::{ArtifactMetadata, MetadataKind, VERSION_POINTER_FILENAME};
pub use repository::{
    join_relative, ArtifactRepository, RepositoryKind, RepositoryLayout, RepositoryLocation,
};
pub use session::{ExecutionRequest, Session};
