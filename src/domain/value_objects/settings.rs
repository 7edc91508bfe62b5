//! Session settings value objects
//!
//! Server credentials and proxy definitions as they appear in the user's
//! settings file. The repository system turns them into `Authentication`
//! and `ProxyInfo` for matching repositories.

use serde::{Deserialize, Serialize};

use super::{Authentication, ProxyInfo};

/// Credentials for a repository, matched by repository id
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub passphrase: Option<String>,
}

impl ServerSettings {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn to_authentication(&self) -> Authentication {
        Authentication::default()
            .with_username(self.username.clone())
            .with_password(self.password.clone())
            .with_private_key(self.private_key.clone())
            .with_passphrase(self.passphrase.clone())
    }
}

impl std::fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSettings")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// A configured network proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySettings {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub non_proxy_hosts: Option<String>,
}

impl ProxySettings {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            id: None,
            active: true,
            protocol: protocol.into(),
            host: host.into(),
            port,
            username: None,
            password: None,
            non_proxy_hosts: None,
        }
    }

    pub fn with_non_proxy_hosts(mut self, hosts: impl Into<String>) -> Self {
        self.non_proxy_hosts = Some(hosts.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn to_proxy_info(&self) -> ProxyInfo {
        ProxyInfo {
            protocol: self.protocol.clone(),
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
            non_proxy_hosts: self.non_proxy_hosts.clone(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_protocol() -> String {
    "http".to_string()
}

fn default_port() -> u16 {
    8080
}
