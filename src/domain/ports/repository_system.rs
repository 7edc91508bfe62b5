//! Repository System Port
//!
//! Injects session-level proxy and credential settings into repository
//! descriptions. Injection never fails; empty lists leave repositories as
//! they are.

use crate::domain::entities::ArtifactRepository;
use crate::domain::value_objects::{ProxySettings, ServerSettings};

pub trait RepositorySystem: Send + Sync {
    /// Attach the matching proxy, if any, to each repository
    fn inject_proxy(&self, repositories: &mut [ArtifactRepository], proxies: &[ProxySettings]);

    /// Attach the matching server credentials, if any, to each repository
    fn inject_authentication(
        &self,
        repositories: &mut [ArtifactRepository],
        servers: &[ServerSettings],
    );
}
