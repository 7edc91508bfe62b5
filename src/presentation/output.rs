//! Output Rendering
//!
//! Renders the outcome of a successful deploy for humans or for scripts.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{Artifact, ArtifactRepository};

/// What a successful deploy produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploySummary {
    pub coordinates: String,
    pub repository: String,
    pub remote_path: String,
    pub local_path: PathBuf,
    pub metadata: Vec<String>,
}

impl DeploySummary {
    pub fn new(
        artifact: &Artifact,
        deployment_repository: &ArtifactRepository,
        local_repository: &ArtifactRepository,
    ) -> Self {
        Self {
            coordinates: artifact.coordinates().to_string(),
            repository: deployment_repository.to_string(),
            remote_path: deployment_repository.path_of(artifact),
            local_path: local_repository.local_path_of(artifact),
            metadata: artifact
                .metadata()
                .iter()
                .map(|m| deployment_repository.path_of_remote_metadata(m))
                .collect(),
        }
    }

    /// Human-readable summary
    pub fn render_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Deployed {} to {}", self.coordinates, self.repository)?;
        writeln!(out, "  artifact: {}", self.remote_path)?;
        writeln!(out, "  local:    {}", self.local_path.display())?;
        for metadata in &self.metadata {
            writeln!(out, "  metadata: {}", metadata)?;
        }
        Ok(())
    }

    /// One NDJSON line, matching the progress event stream
    pub fn render_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut json = serde_json::to_value(self).map_err(io::Error::other)?;
        json["event"] = serde_json::json!("deploy_completed");
        writeln!(out, "{}", json)
    }
}
