//! Settings-based repository system
//!
//! Proxy selection: the first active proxy whose protocol matches the
//! repository protocol (case-insensitive) and whose non-proxy hosts do not
//! cover the repository host. Credential selection: the first server whose id
//! equals the repository id.

use tracing::trace;

use crate::domain::entities::ArtifactRepository;
use crate::domain::ports::RepositorySystem;
use crate::domain::value_objects::{ProxySettings, ServerSettings};

/// `RepositorySystem` backed by the user's proxy and server settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsRepositorySystem;

impl SettingsRepositorySystem {
    pub fn new() -> Self {
        Self
    }

    fn select_proxy<'a>(
        repository: &ArtifactRepository,
        proxies: &'a [ProxySettings],
    ) -> Option<&'a ProxySettings> {
        let protocol = repository.protocol();
        proxies.iter().find(|proxy| {
            if !proxy.active || !proxy.protocol.eq_ignore_ascii_case(protocol) {
                return false;
            }
            match repository.host() {
                Some(host) => !proxy.to_proxy_info().bypasses(host),
                None => true,
            }
        })
    }
}

impl RepositorySystem for SettingsRepositorySystem {
    fn inject_proxy(&self, repositories: &mut [ArtifactRepository], proxies: &[ProxySettings]) {
        for repository in repositories.iter_mut() {
            if let Some(proxy) = Self::select_proxy(repository, proxies) {
                trace!(
                    repository = repository.id(),
                    proxy = %proxy.host,
                    "Injecting proxy"
                );
                repository.set_proxy(Some(proxy.to_proxy_info()));
            }
        }
    }

    fn inject_authentication(
        &self,
        repositories: &mut [ArtifactRepository],
        servers: &[ServerSettings],
    ) {
        for repository in repositories.iter_mut() {
            if let Some(server) = servers.iter().find(|s| s.id == repository.id()) {
                trace!(repository = repository.id(), "Injecting server credentials");
                repository.set_authentication(Some(server.to_authentication()));
            }
        }
    }
}
