//! Artifact coordinates value object
//!
//! Coordinates identify an artifact inside a repository:
//! `group:artifact:version[:type[:classifier]]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DeployerError, DeployerResult};

/// Default artifact type when none is given
pub const DEFAULT_TYPE: &str = "jar";

const SNAPSHOT_SUFFIX: &str = "SNAPSHOT";

/// Immutable artifact coordinates
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactCoordinates {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(rename = "type")]
    artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
}

impl ArtifactCoordinates {
    /// Create coordinates with the default `jar` type and no classifier
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            artifact_type: DEFAULT_TYPE.to_string(),
            classifier: None,
        }
    }

    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = artifact_type.into();
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = if classifier.is_empty() {
            None
        } else {
            Some(classifier)
        };
        self
    }

    /// Parse `group:artifact:version[:type[:classifier]]`
    pub fn parse(input: &str) -> DeployerResult<Self> {
        let invalid = |reason: &str| DeployerError::InvalidCoordinates {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = input.trim().split(':').collect();
        if parts.len() < 3 || parts.len() > 5 {
            return Err(invalid(
                "expected group:artifact:version[:type[:classifier]]",
            ));
        }

        for part in &parts[..3] {
            validate_segment(part).map_err(|reason| invalid(&reason))?;
        }

        let mut coords = Self::new(parts[0], parts[1], parts[2]);
        if let Some(artifact_type) = parts.get(3) {
            validate_segment(artifact_type).map_err(|reason| invalid(&reason))?;
            coords = coords.with_type(*artifact_type);
        }
        if let Some(classifier) = parts.get(4) {
            if !classifier.is_empty() {
                validate_segment(classifier).map_err(|reason| invalid(&reason))?;
            }
            coords = coords.with_classifier(*classifier);
        }
        Ok(coords)
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Versionless key (`group:artifact`) shared by all versions
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Returns true for `-SNAPSHOT` versions
    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with(SNAPSHOT_SUFFIX)
    }
}

fn validate_segment(segment: &str) -> Result<(), String> {
    if segment.is_empty() {
        return Err("empty coordinate segment".to_string());
    }
    if segment == "." || segment == ".." {
        return Err(format!("'{}' is not a valid segment", segment));
    }
    if segment
        .chars()
        .any(|c| c == '/' || c == '\\' || c.is_whitespace())
    {
        return Err(format!(
            "'{}' contains a path separator or whitespace",
            segment
        ));
    }
    Ok(())
}

impl fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.artifact_type
        )?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

impl FromStr for ArtifactCoordinates {
    type Err = DeployerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
