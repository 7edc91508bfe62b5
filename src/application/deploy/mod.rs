//! Deploy Module
//!
//! Publishes one artifact and its metadata to a deployment repository.
//!
//! ## Structure
//!
//! - `error` - Failure taxonomy (`DeploymentError`, `DeployPhase`)
//! - `local_cache` - Local repository synchronization (`LocalCacheSynchronizer`)
//! - `use_case` - Orchestration (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use artifact_deployer::application::deploy::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(fs, repository_system, transformation, uploader, publisher);
//! use_case.deploy(&source, &mut artifact, &remote, &local, session.as_ref())?;
//! ```

mod error;
mod local_cache;
mod use_case;

pub use error::{DeployPhase, DeploymentError};
pub use local_cache::{LocalCacheSync, LocalCacheSynchronizer};
pub use use_case::{legacy_source_path, DeployUseCase};
