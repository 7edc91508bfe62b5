//! Artifact Transformations
//!
//! Concrete implementations of the ArtifactTransformation port:
//! - `TransformationChain`: runs several transformations in order
//! - `ChecksumTransformation`: attaches checksum metadata
//! - `VersionPointerTransformation`: attaches latest/release metadata

mod chain;
mod checksum;
mod version_pointer;

pub use chain::TransformationChain;
pub use checksum::ChecksumTransformation;
pub use version_pointer::VersionPointerTransformation;
