//! ArtifactRepository entity - a repository endpoint
//!
//! Two repositories take part in every deploy: the local repository (a cache
//! on disk) and the deployment repository (the remote target). A repository
//! maps artifacts and metadata to relative paths through its layout.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::value_objects::{Authentication, ProxyInfo};
use crate::error::{DeployerError, DeployerResult};

use super::{Artifact, ArtifactMetadata};

/// Whether the repository may be rebuilt with session credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryKind {
    /// Plain description built from settings; proxy/auth may be injected
    #[default]
    Default,
    /// Specialized repository that must be passed through untouched
    Custom,
}

/// Path layout inside a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryLayout {
    /// `group/as/dirs/artifactId/version/file`
    #[default]
    Default,
    /// Every file at the repository root
    Flat,
}

impl RepositoryLayout {
    /// Relative path of the artifact file
    pub fn path_of(&self, artifact: &Artifact) -> String {
        let filename = artifact.default_filename();
        match self {
            RepositoryLayout::Default => {
                let coords = artifact.coordinates();
                format!(
                    "{}/{}/{}",
                    self.artifact_directory(coords.group_id(), coords.artifact_id()),
                    coords.version(),
                    filename
                )
            }
            RepositoryLayout::Flat => filename,
        }
    }

    /// Relative path of a metadata item in the local repository
    pub fn path_of_local_metadata(&self, metadata: &ArtifactMetadata, repository_id: &str) -> String {
        self.metadata_path(metadata, &metadata.local_filename(repository_id))
    }

    /// Relative path of a metadata item in a remote repository
    pub fn path_of_remote_metadata(&self, metadata: &ArtifactMetadata) -> String {
        self.metadata_path(metadata, &metadata.remote_filename())
    }

    fn metadata_path(&self, metadata: &ArtifactMetadata, filename: &str) -> String {
        match self {
            RepositoryLayout::Default => {
                let dir = self.artifact_directory(metadata.group_id(), metadata.artifact_id());
                if metadata.stored_in_version_directory() {
                    format!("{}/{}/{}", dir, metadata.version(), filename)
                } else {
                    format!("{}/{}", dir, filename)
                }
            }
            RepositoryLayout::Flat => filename.to_string(),
        }
    }

    fn artifact_directory(&self, group_id: &str, artifact_id: &str) -> String {
        format!("{}/{}", group_id.replace('.', "/"), artifact_id)
    }
}

/// Where a repository lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryLocation {
    Url(Url),
    Directory(PathBuf),
}

impl fmt::Display for RepositoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryLocation::Url(url) => write!(f, "{}", url),
            RepositoryLocation::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// A repository description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRepository {
    id: String,
    location: RepositoryLocation,
    layout: RepositoryLayout,
    kind: RepositoryKind,
    authentication: Option<Authentication>,
    proxy: Option<ProxyInfo>,
}

impl ArtifactRepository {
    /// Repository addressed by URL (`file://`, `https://`, ...)
    pub fn new(id: impl Into<String>, url: &str) -> DeployerResult<Self> {
        let parsed = Url::parse(url).map_err(|e| DeployerError::InvalidRepository {
            location: url.to_string(),
            reason: e.to_string(),
        })?;
        // Single-letter schemes are Windows drive letters, not URLs
        if parsed.scheme().len() < 2 {
            return Err(DeployerError::InvalidRepository {
                location: url.to_string(),
                reason: "looks like a drive path, use a file:// URL".to_string(),
            });
        }
        Ok(Self::with_location(id, RepositoryLocation::Url(parsed)))
    }

    /// Repository rooted at a local directory
    pub fn local(id: impl Into<String>, basedir: impl Into<PathBuf>) -> Self {
        Self::with_location(id, RepositoryLocation::Directory(basedir.into()))
    }

    fn with_location(id: impl Into<String>, location: RepositoryLocation) -> Self {
        Self {
            id: id.into(),
            location,
            layout: RepositoryLayout::default(),
            kind: RepositoryKind::default(),
            authentication: None,
            proxy: None,
        }
    }

    pub fn with_layout(mut self, layout: RepositoryLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_kind(mut self, kind: RepositoryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    pub fn with_proxy(mut self, proxy: ProxyInfo) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn set_authentication(&mut self, authentication: Option<Authentication>) {
        self.authentication = authentication;
    }

    pub fn set_proxy(&mut self, proxy: Option<ProxyInfo>) {
        self.proxy = proxy;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &RepositoryLocation {
        &self.location
    }

    pub fn layout(&self) -> RepositoryLayout {
        self.layout
    }

    pub fn kind(&self) -> RepositoryKind {
        self.kind
    }

    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }

    pub fn proxy(&self) -> Option<&ProxyInfo> {
        self.proxy.as_ref()
    }

    /// URL scheme; directories report `file`
    pub fn protocol(&self) -> &str {
        match &self.location {
            RepositoryLocation::Url(url) => url.scheme(),
            RepositoryLocation::Directory(_) => "file",
        }
    }

    /// Host part of the URL, if any
    pub fn host(&self) -> Option<&str> {
        match &self.location {
            RepositoryLocation::Url(url) => url.host_str().filter(|h| !h.is_empty()),
            RepositoryLocation::Directory(_) => None,
        }
    }

    /// Base directory (for `file:` repositories) or base path of the URL
    pub fn basedir(&self) -> PathBuf {
        match &self.location {
            RepositoryLocation::Directory(dir) => dir.clone(),
            RepositoryLocation::Url(url) if url.scheme() == "file" => url
                .to_file_path()
                .unwrap_or_else(|_| PathBuf::from(url.path())),
            RepositoryLocation::Url(url) => PathBuf::from(url.path()),
        }
    }

    /// Relative path of `artifact` in this repository
    pub fn path_of(&self, artifact: &Artifact) -> String {
        self.layout.path_of(artifact)
    }

    /// Canonical on-disk location: `basedir + path_of(artifact)`
    pub fn local_path_of(&self, artifact: &Artifact) -> PathBuf {
        join_relative(&self.basedir(), &self.path_of(artifact))
    }

    /// Relative path of metadata fetched from or published to `remote`
    pub fn path_of_local_metadata(
        &self,
        metadata: &ArtifactMetadata,
        remote: &ArtifactRepository,
    ) -> String {
        self.layout.path_of_local_metadata(metadata, remote.id())
    }

    pub fn path_of_remote_metadata(&self, metadata: &ArtifactMetadata) -> String {
        self.layout.path_of_remote_metadata(metadata)
    }
}

impl fmt::Display for ArtifactRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.location)
    }
}

/// Join a `/`-separated relative path onto `base`
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}
