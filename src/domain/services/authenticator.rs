//! Repository Authenticator
//!
//! Produces the effective deployment repository for a session. Only plain
//! (`RepositoryKind::Default`) repositories without credentials are rebuilt;
//! anything else passes through untouched so that deploys to an alternate,
//! already-authenticated location keep their settings.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{ArtifactRepository, RepositoryKind, Session};
use crate::domain::ports::RepositorySystem;

/// Enriches repositories with session proxy and credential settings
#[derive(Clone)]
pub struct RepositoryAuthenticator {
    repository_system: Arc<dyn RepositorySystem>,
}

impl RepositoryAuthenticator {
    pub fn new(repository_system: Arc<dyn RepositorySystem>) -> Self {
        Self { repository_system }
    }

    /// Returns the effective repository; `repository` itself is never modified
    pub fn enrich(
        &self,
        repository: &ArtifactRepository,
        session: Option<&Session>,
    ) -> ArtifactRepository {
        if repository.kind() != RepositoryKind::Default || repository.authentication().is_some() {
            return repository.clone();
        }

        let Some(request) = session.and_then(Session::request) else {
            return repository.clone();
        };

        let mut repositories = vec![repository.clone()];
        self.repository_system
            .inject_proxy(&mut repositories, request.proxies());
        self.repository_system
            .inject_authentication(&mut repositories, request.servers());

        let enriched = repositories.pop().unwrap_or_else(|| repository.clone());
        debug!(
            repository = enriched.id(),
            proxy = enriched.proxy().is_some(),
            authenticated = enriched.authentication().is_some(),
            "Enriched deployment repository from session"
        );
        enriched
    }
}
