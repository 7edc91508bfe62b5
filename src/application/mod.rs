//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Orchestrates the deploy flow (enrich, transform, cache, upload, publish metadata)

pub mod deploy;

pub use deploy::{
    legacy_source_path, DeployPhase, DeployUseCase, DeploymentError, LocalCacheSync,
    LocalCacheSynchronizer,
};
