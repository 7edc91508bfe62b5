//! Domain Layer
//!
//! The deploy model without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Artifact, ArtifactMetadata, ArtifactRepository, Session
//! - `value_objects/` - Coordinates, credentials, proxies, checksums
//! - `services/` - Repository authentication, listener adaptation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 3. **Explicit session** - The session is passed in, never looked up

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
