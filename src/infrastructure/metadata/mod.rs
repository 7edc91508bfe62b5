//! Metadata Publishing
//!
//! Concrete implementation of the MetadataPublisher port.

mod publisher;

pub use publisher::RepositoryMetadataPublisher;
