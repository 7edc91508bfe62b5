//! Artifact entity - a buildable unit being published
//!
//! An artifact is identified by its coordinates, optionally points at the file
//! that represents it on disk, and carries the metadata items that must be
//! published alongside it.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ArtifactCoordinates;

use super::ArtifactMetadata;

/// Describes how an artifact type maps to files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHandler {
    /// File extension used for default file names
    extension: String,
    /// Classifier implied by the type (e.g. `sources` for `java-source`)
    classifier: Option<String>,
}

impl ArtifactHandler {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Handler for a well-known artifact type; unknown types use the type as extension
    pub fn for_type(artifact_type: &str) -> Self {
        match artifact_type {
            "pom" => Self::new("pom"),
            "jar" | "maven-plugin" | "ejb" | "ejb-client" => Self::new("jar"),
            "test-jar" => Self::new("jar").with_classifier("tests"),
            "java-source" => Self::new("jar").with_classifier("sources"),
            "javadoc" => Self::new("jar").with_classifier("javadoc"),
            other => Self::new(other),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }
}

/// An artifact to deploy
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    coordinates: ArtifactCoordinates,
    handler: ArtifactHandler,
    file: Option<PathBuf>,
    metadata: Vec<ArtifactMetadata>,
}

impl Artifact {
    /// Create an artifact whose handler is derived from the coordinates' type
    pub fn new(coordinates: ArtifactCoordinates) -> Self {
        let handler = ArtifactHandler::for_type(coordinates.artifact_type());
        Self {
            coordinates,
            handler,
            file: None,
            metadata: Vec::new(),
        }
    }

    pub fn with_handler(mut self, handler: ArtifactHandler) -> Self {
        self.handler = handler;
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_metadata(mut self, metadata: ArtifactMetadata) -> Self {
        self.add_metadata(metadata);
        self
    }

    pub fn coordinates(&self) -> &ArtifactCoordinates {
        &self.coordinates
    }

    pub fn handler(&self) -> &ArtifactHandler {
        &self.handler
    }

    /// Explicit classifier, falling back to the one implied by the handler
    pub fn classifier(&self) -> Option<&str> {
        self.coordinates
            .classifier()
            .or_else(|| self.handler.classifier())
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn set_file(&mut self, file: impl Into<PathBuf>) {
        self.file = Some(file.into());
    }

    /// Metadata items in insertion order
    pub fn metadata(&self) -> &[ArtifactMetadata] {
        &self.metadata
    }

    /// Add a metadata item, replacing any item with the same key in place
    pub fn add_metadata(&mut self, metadata: ArtifactMetadata) {
        let key = metadata.key();
        match self.metadata.iter_mut().find(|m| m.key() == key) {
            Some(existing) => *existing = metadata,
            None => self.metadata.push(metadata),
        }
    }

    /// `artifactId-version[-classifier].extension`
    pub fn default_filename(&self) -> String {
        let mut name = format!(
            "{}-{}",
            self.coordinates.artifact_id(),
            self.coordinates.version()
        );
        if let Some(classifier) = self.classifier() {
            name.push('-');
            name.push_str(classifier);
        }
        name.push('.');
        name.push_str(self.handler.extension());
        name
    }
}
