//! Settings type definitions

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ExecutionRequest, Session};
use crate::domain::ports::TransferListener;
use crate::domain::value_objects::{ProxySettings, ServerSettings};
use crate::error::{DeployerError, DeployerResult};

/// Top-level settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Local repository base directory
    #[serde(default)]
    pub local_repository: Option<PathBuf>,

    #[serde(default)]
    pub output: OutputConfig,

    /// Repository credentials, matched by repository id
    #[serde(default)]
    pub servers: Vec<ServerSettings>,

    /// Network proxies, first match wins
    #[serde(default)]
    pub proxies: Vec<ProxySettings>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub progress: ProgressMode,
}

/// How transfer progress is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// JSON with `--json`, logging on a terminal, otherwise silent
    #[default]
    Auto,
    Json,
    Log,
    None,
}

impl ProgressMode {
    pub const VALUES: &'static [&'static str] = &["auto", "json", "log", "none"];
}

impl FromStr for ProgressMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ProgressMode::Auto),
            "json" => Ok(ProgressMode::Json),
            "log" => Ok(ProgressMode::Log),
            "none" | "off" => Ok(ProgressMode::None),
            other => Err(format!(
                "unknown progress mode '{}', expected one of: {}",
                other,
                Self::VALUES.join(", ")
            )),
        }
    }
}

impl Settings {
    /// Parse a settings file, ignoring unknown keys
    pub fn load(path: &Path) -> DeployerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DeployerError::InvalidSettings {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Configured local repository, or `~/.m2/repository`
    pub fn local_repository_or_default(&self) -> PathBuf {
        self.local_repository.clone().unwrap_or_else(|| {
            super::deployer_home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".m2")
                .join("repository")
        })
    }

    pub fn server(&self, id: &str) -> Option<&ServerSettings> {
        self.servers.iter().find(|s| s.id == id)
    }

    /// Request carrying these settings' proxies and servers
    pub fn to_request(&self) -> ExecutionRequest {
        ExecutionRequest::new()
            .with_proxies(self.proxies.clone())
            .with_servers(self.servers.clone())
    }

    /// Session for a deploy, with an optional progress listener
    pub fn to_session(&self, listener: Option<Arc<dyn TransferListener>>) -> Session {
        let request = self.to_request();
        Session::new(match listener {
            Some(listener) => request.with_transfer_listener(listener),
            None => request,
        })
    }
}
