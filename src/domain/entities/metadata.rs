//! ArtifactMetadata entity - descriptors published alongside an artifact
//!
//! Each item is published on its own. Checksums live in the artifact's
//! version directory; version pointers live at the artifact level and are
//! named per repository in the local cache so that pointers from different
//! remotes never overwrite each other.
//!
//! A version pointer is merged with the previously published document before
//! it is stored, so the `<versions>` list only ever grows.

use chrono::Utc;
use quick_xml::escape::escape;
use serde::Deserialize;

use crate::domain::value_objects::{ArtifactCoordinates, Checksum, ChecksumAlgorithm};

/// Remote file name of version pointer metadata
pub const VERSION_POINTER_FILENAME: &str = "maven-metadata.xml";

/// What a metadata item describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataKind {
    /// Digest of the artifact file, published as `<file>.<algorithm>`
    Checksum {
        algorithm: ChecksumAlgorithm,
        target_filename: String,
    },
    /// `latest` / `release` pointer plus every known version of the artifact
    VersionPointer {
        latest: String,
        release: Option<String>,
        versions: Vec<String>,
    },
}

/// A single metadata item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactMetadata {
    group_id: String,
    artifact_id: String,
    version: String,
    kind: MetadataKind,
    content: String,
}

impl ArtifactMetadata {
    /// Checksum item for `target_filename`
    pub fn checksum(
        coordinates: &ArtifactCoordinates,
        target_filename: impl Into<String>,
        checksum: Checksum,
    ) -> Self {
        Self {
            group_id: coordinates.group_id().to_string(),
            artifact_id: coordinates.artifact_id().to_string(),
            version: coordinates.version().to_string(),
            kind: MetadataKind::Checksum {
                algorithm: checksum.algorithm(),
                target_filename: target_filename.into(),
            },
            content: checksum.hex().to_string(),
        }
    }

    /// Version pointer item; `release` is `None` for snapshots
    pub fn version_pointer(
        coordinates: &ArtifactCoordinates,
        latest: impl Into<String>,
        release: Option<&str>,
    ) -> Self {
        Self::pointer(
            coordinates.group_id(),
            coordinates.artifact_id(),
            coordinates.version(),
            latest.into(),
            release.map(str::to_string),
            vec![coordinates.version().to_string()],
        )
    }

    fn pointer(
        group_id: &str,
        artifact_id: &str,
        version: &str,
        latest: String,
        release: Option<String>,
        versions: Vec<String>,
    ) -> Self {
        let content = render_version_pointer(
            group_id,
            artifact_id,
            &latest,
            release.as_deref(),
            &versions,
        );
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            kind: MetadataKind::VersionPointer {
                latest,
                release,
                versions,
            },
            content,
        }
    }

    /// Fold a previously published document into this item
    ///
    /// Known versions are kept in their published order and new ones are
    /// appended. `latest` always moves to this item; an existing `release`
    /// survives when this item carries none. Checksums are returned as-is.
    pub fn merged_with(&self, published: &str) -> Result<Self, quick_xml::DeError> {
        let MetadataKind::VersionPointer {
            latest,
            release,
            versions,
        } = &self.kind
        else {
            return Ok(self.clone());
        };

        let previous = quick_xml::de::from_str::<PublishedMetadata>(published)?
            .versioning
            .unwrap_or_default();

        let mut merged = previous.versions.unwrap_or_default().version;
        for version in versions {
            if !merged.contains(version) {
                merged.push(version.clone());
            }
        }
        let release = release.clone().or(previous.release);

        Ok(Self::pointer(
            &self.group_id,
            &self.artifact_id,
            &self.version,
            latest.clone(),
            release,
            merged,
        ))
    }

    /// Identity of the item; an artifact holds at most one item per key
    pub fn key(&self) -> String {
        match &self.kind {
            MetadataKind::Checksum {
                algorithm,
                target_filename,
            } => format!("checksum {} {}", target_filename, algorithm),
            MetadataKind::VersionPointer { .. } => {
                format!("versioning {}:{}", self.group_id, self.artifact_id)
            }
        }
    }

    pub fn kind(&self) -> &MetadataKind {
        &self.kind
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

    /// Serialized payload
    pub fn content(&self) -> &str {
        &self.content
    }

    /// File name inside the remote repository
    pub fn remote_filename(&self) -> String {
        match &self.kind {
            MetadataKind::Checksum {
                algorithm,
                target_filename,
            } => format!("{}.{}", target_filename, algorithm.extension()),
            MetadataKind::VersionPointer { .. } => VERSION_POINTER_FILENAME.to_string(),
        }
    }

    /// File name inside the local repository for metadata from `repository_id`
    pub fn local_filename(&self, repository_id: &str) -> String {
        match &self.kind {
            MetadataKind::Checksum { .. } => self.remote_filename(),
            MetadataKind::VersionPointer { .. } => format!("maven-metadata-{}.xml", repository_id),
        }
    }

    /// Whether the item sits next to the artifact file rather than one level up
    pub fn stored_in_version_directory(&self) -> bool {
        matches!(self.kind, MetadataKind::Checksum { .. })
    }
}

/// `maven-metadata.xml` as published; only the fields merging needs
#[derive(Debug, Default, Deserialize)]
struct PublishedMetadata {
    #[serde(default)]
    versioning: Option<PublishedVersioning>,
}

#[derive(Debug, Default, Deserialize)]
struct PublishedVersioning {
    #[serde(default)]
    release: Option<String>,
    #[serde(default)]
    versions: Option<PublishedVersions>,
}

#[derive(Debug, Default, Deserialize)]
struct PublishedVersions {
    #[serde(default)]
    version: Vec<String>,
}

fn render_version_pointer(
    group_id: &str,
    artifact_id: &str,
    latest: &str,
    release: Option<&str>,
    versions: &[String],
) -> String {
    let release_line = release
        .map(|r| format!("    <release>{}</release>\n", escape(r)))
        .unwrap_or_default();
    let version_lines: String = versions
        .iter()
        .map(|v| format!("      <version>{}</version>\n", escape(v.as_str())))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <metadata>\n\
         \x20 <groupId>{}</groupId>\n\
         \x20 <artifactId>{}</artifactId>\n\
         \x20 <versioning>\n\
         \x20   <latest>{}</latest>\n\
         {}\
         \x20   <versions>\n\
         {}\
         \x20   </versions>\n\
         \x20   <lastUpdated>{}</lastUpdated>\n\
         \x20 </versioning>\n\
         </metadata>\n",
        escape(group_id),
        escape(artifact_id),
        escape(latest),
        release_line,
        version_lines,
        Utc::now().format("%Y%m%d%H%M%S"),
    )
}
