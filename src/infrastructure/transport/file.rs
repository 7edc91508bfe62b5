//! File Transport
//!
//! Implements RemoteUploader for `file:` repositories (and plain directories).
//! Content is streamed in fixed-size chunks into a temp file next to the
//! destination, then renamed into place.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::trace;

use crate::domain::entities::{join_relative, Artifact, ArtifactMetadata, ArtifactRepository};
use crate::domain::ports::{RemoteUploader, TransferError, TransferResource, TransportListener};

/// Bytes per progress event
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Uploader for repositories on the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileUploader;

impl FileUploader {
    pub fn new() -> Self {
        Self
    }

    fn destination(
        repository: &ArtifactRepository,
        relative: &str,
    ) -> Result<PathBuf, TransferError> {
        if repository.protocol() != "file" {
            return Err(TransferError::UnsupportedProtocol {
                protocol: repository.protocol().to_string(),
                repository: repository.id().to_string(),
            });
        }
        Ok(join_relative(&repository.basedir(), relative))
    }

    fn transfer(
        &self,
        source: &Path,
        relative: &str,
        repository: &ArtifactRepository,
        listener: Option<&dyn TransportListener>,
    ) -> Result<u64, TransferError> {
        let destination = Self::destination(repository, relative)?;

        let mut resource = TransferResource::new(relative, repository.location().to_string());
        if let Ok(meta) = std::fs::metadata(source) {
            resource = resource.with_content_length(meta.len());
        }
        if let Some(listener) = listener {
            listener.transfer_initiated(&resource);
        }

        match copy_chunked(source, &destination, &resource, listener) {
            Ok(transferred) => {
                trace!(resource = %resource, transferred, "Transfer completed");
                if let Some(listener) = listener {
                    listener.transfer_completed(&resource, transferred);
                }
                Ok(transferred)
            }
            Err(e) => {
                if let Some(listener) = listener {
                    listener.transfer_error(&resource, &e.to_string());
                }
                Err(TransferError::Failed {
                    resource: relative.to_string(),
                    repository: repository.id().to_string(),
                    source: e,
                })
            }
        }
    }
}

fn copy_chunked(
    source: &Path,
    destination: &Path,
    resource: &TransferResource,
    listener: Option<&dyn TransportListener>,
) -> io::Result<u64> {
    let mut input = File::open(source)?;

    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;
    let mut output = NamedTempFile::new_in(parent)?;

    if let Some(listener) = listener {
        listener.transfer_started(resource);
    }

    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        output.write_all(&buf[..n])?;
        total += n as u64;
        if let Some(listener) = listener {
            listener.transfer_progress(resource, n as u64);
        }
    }

    output.as_file().sync_all()?;
    output.persist(destination).map_err(|e| e.error)?;
    Ok(total)
}

impl RemoteUploader for FileUploader {
    fn put_artifact(
        &self,
        source: &Path,
        artifact: &Artifact,
        repository: &ArtifactRepository,
        listener: Option<&dyn TransportListener>,
    ) -> Result<(), TransferError> {
        let relative = repository.path_of(artifact);
        self.transfer(source, &relative, repository, listener)
            .map(|_| ())
    }

    fn put_artifact_metadata(
        &self,
        source: &Path,
        metadata: &ArtifactMetadata,
        repository: &ArtifactRepository,
    ) -> Result<(), TransferError> {
        let relative = repository.path_of_remote_metadata(metadata);
        self.transfer(source, &relative, repository, None).map(|_| ())
    }
}
