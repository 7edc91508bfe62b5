//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (LocalFs)
//! - `transport/` - Uploaders (FileUploader)
//! - `metadata/` - Metadata publisher backed by the local repository
//! - `transformation/` - Checksum and version pointer transformations
//! - `events/` - Transfer listeners (JSON, logging)

pub mod events;
pub mod fs;
pub mod metadata;
pub mod transformation;
pub mod transport;

// Re-export for convenience
pub use events::{JsonTransferListener, LoggingTransferListener};
pub use fs::LocalFs;
pub use metadata::RepositoryMetadataPublisher;
pub use transformation::{
    ChecksumTransformation, TransformationChain, VersionPointerTransformation,
};
pub use transport::FileUploader;
