//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod authentication;
mod checksum;
mod config_warning;
mod coordinates;
mod proxy;
mod settings;

pub use authentication::Authentication;
pub use checksum::{Checksum, ChecksumAlgorithm};
pub use config_warning::ConfigWarning;
pub use coordinates::{ArtifactCoordinates, DEFAULT_TYPE};
pub use proxy::ProxyInfo;
pub use settings::{ProxySettings, ServerSettings};
