//! Transport Implementations
//!
//! Concrete implementations of the RemoteUploader port.

mod file;

pub use file::{FileUploader, CHUNK_SIZE};
