//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod metadata_publisher;
pub mod remote_uploader;
pub mod repository_system;
pub mod transfer_listener;
pub mod transformation;

pub use file_system::{FileSystem, FsError, FsResult};
pub use metadata_publisher::{MetadataDeploymentError, MetadataPublisher};
pub use remote_uploader::{RemoteUploader, TransferError};
pub use repository_system::RepositorySystem;
pub use transfer_listener::{
    TransferEvent, TransferListener, TransferResource, TransportListener,
};
pub use transformation::{ArtifactTransformation, TransformationError};
