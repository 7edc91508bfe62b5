//! Local Cache Synchronizer
//!
//! Keeps the local repository copy of a deployed artifact in step with the
//! file being deployed. When the source already is the local copy nothing is
//! written.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::domain::entities::{Artifact, ArtifactRepository};
use crate::domain::ports::{FileSystem, FsResult};

/// What the synchronizer did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalCacheSync {
    /// The source was copied to `target`
    Copied { target: PathBuf, bytes: u64 },
    /// The source already is the local copy
    Unchanged { target: PathBuf },
}

impl LocalCacheSync {
    pub fn target(&self) -> &Path {
        match self {
            LocalCacheSync::Copied { target, .. } | LocalCacheSync::Unchanged { target } => target,
        }
    }
}

/// Copies deployed files into the local repository
pub struct LocalCacheSynchronizer<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> LocalCacheSynchronizer<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Local repository path for `artifact`
    pub fn target_for(&self, local_repository: &ArtifactRepository, artifact: &Artifact) -> PathBuf {
        local_repository.local_path_of(artifact)
    }

    /// Copy `source` to its local repository location unless it already is there
    pub fn sync(
        &self,
        source: &Path,
        local_repository: &ArtifactRepository,
        artifact: &Artifact,
    ) -> FsResult<LocalCacheSync> {
        let target = self.target_for(local_repository, artifact);

        if self.is_same_file(source, &target) {
            trace!(target = %target.display(), "Source already in local repository");
            return Ok(LocalCacheSync::Unchanged { target });
        }

        if let Some(parent) = target.parent() {
            self.file_system.create_dir_all(parent)?;
        }
        let bytes = self.file_system.copy(source, &target)?;
        trace!(target = %target.display(), bytes, "Copied into local repository");
        Ok(LocalCacheSync::Copied { target, bytes })
    }

    /// Lexically equal, or equal once both sides resolve
    fn is_same_file(&self, source: &Path, target: &Path) -> bool {
        if source == target {
            return true;
        }
        match (
            self.file_system.canonicalize(source),
            self.file_system.canonicalize(target),
        ) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
