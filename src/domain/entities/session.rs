//! Session entity - request-scoped network configuration
//!
//! A session is optional: deploys started outside a build session get no
//! proxy/credential injection and no progress listener. The core only reads it.

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::TransferListener;
use crate::domain::value_objects::{ProxySettings, ServerSettings};

/// Request configuration carried by a session
#[derive(Clone, Default)]
pub struct ExecutionRequest {
    proxies: Vec<ProxySettings>,
    servers: Vec<ServerSettings>,
    transfer_listener: Option<Arc<dyn TransferListener>>,
}

impl ExecutionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proxies(mut self, proxies: Vec<ProxySettings>) -> Self {
        self.proxies = proxies;
        self
    }

    pub fn with_servers(mut self, servers: Vec<ServerSettings>) -> Self {
        self.servers = servers;
        self
    }

    pub fn with_transfer_listener(mut self, listener: Arc<dyn TransferListener>) -> Self {
        self.transfer_listener = Some(listener);
        self
    }

    pub fn proxies(&self) -> &[ProxySettings] {
        &self.proxies
    }

    pub fn servers(&self) -> &[ServerSettings] {
        &self.servers
    }

    pub fn transfer_listener(&self) -> Option<&Arc<dyn TransferListener>> {
        self.transfer_listener.as_ref()
    }
}

impl fmt::Debug for ExecutionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionRequest")
            .field("proxies", &self.proxies)
            .field("servers", &self.servers)
            .field("transfer_listener", &self.transfer_listener.is_some())
            .finish()
    }
}

/// The current build session
#[derive(Debug, Clone, Default)]
pub struct Session {
    request: Option<ExecutionRequest>,
}

impl Session {
    pub fn new(request: ExecutionRequest) -> Self {
        Self {
            request: Some(request),
        }
    }

    /// Session whose request was never set
    pub fn without_request() -> Self {
        Self { request: None }
    }

    pub fn request(&self) -> Option<&ExecutionRequest> {
        self.request.as_ref()
    }

    /// Progress listener configured on the request, if any
    pub fn transfer_listener(&self) -> Option<&Arc<dyn TransferListener>> {
        self.request.as_ref()?.transfer_listener()
    }
}
