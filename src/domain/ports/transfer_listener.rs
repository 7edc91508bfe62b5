//! Transfer Listener Ports
//!
//! Two listener shapes meet here:
//! - `TransferListener` is what a session is configured with. It receives one
//!   `TransferEvent` per notification.
//! - `TransportListener` is what an uploader calls back into, one method per
//!   transfer phase.
//!
//! `domain::services::TransferListenerAdapter` bridges the two.

use std::fmt;

/// The file being moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResource {
    /// Path relative to the repository root
    pub name: String,
    /// Repository base URL or directory
    pub repository: String,
    /// Size in bytes when known up front
    pub content_length: Option<u64>,
}

impl TransferResource {
    pub fn new(name: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repository: repository.into(),
            content_length: None,
        }
    }

    pub fn with_content_length(mut self, length: u64) -> Self {
        self.content_length = Some(length);
        self
    }
}

impl fmt::Display for TransferResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.repository.trim_end_matches('/'), self.name)
    }
}

/// Event emitted while a file is uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEvent {
    /// Upload requested, connection not yet established
    Initiated { resource: TransferResource },

    /// Bytes are about to flow
    Started { resource: TransferResource },

    /// A chunk was written
    Progress {
        resource: TransferResource,
        bytes: u64,
    },

    /// Upload finished
    Completed {
        resource: TransferResource,
        transferred: u64,
    },

    /// Upload failed
    Failed {
        resource: TransferResource,
        error: String,
    },
}

impl TransferEvent {
    pub fn resource(&self) -> &TransferResource {
        match self {
            TransferEvent::Initiated { resource }
            | TransferEvent::Started { resource }
            | TransferEvent::Progress { resource, .. }
            | TransferEvent::Completed { resource, .. }
            | TransferEvent::Failed { resource, .. } => resource,
        }
    }
}

/// Session-level progress listener
///
/// Implementations:
/// - `JsonTransferListener`: NDJSON event stream for CI
/// - `LoggingTransferListener`: tracing output
pub trait TransferListener: Send + Sync {
    /// Handle a transfer event
    fn on_event(&self, event: TransferEvent);
}

/// Transport-level callbacks invoked by a `RemoteUploader`
pub trait TransportListener: Send + Sync {
    fn transfer_initiated(&self, resource: &TransferResource);

    fn transfer_started(&self, resource: &TransferResource);

    fn transfer_progress(&self, resource: &TransferResource, bytes: u64);

    fn transfer_completed(&self, resource: &TransferResource, transferred: u64);

    fn transfer_error(&self, resource: &TransferResource, error: &str);
}
