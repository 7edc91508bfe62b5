//! Logging Transfer Listener
//!
//! Reports transfers through `tracing`. Per-chunk progress goes to `trace`
//! so a default filter only shows start and finish.

use tracing::{info, trace, warn};

use crate::domain::ports::{TransferEvent, TransferListener};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingTransferListener;

impl LoggingTransferListener {
    pub fn new() -> Self {
        Self
    }
}

impl TransferListener for LoggingTransferListener {
    fn on_event(&self, event: TransferEvent) {
        match event {
            TransferEvent::Initiated { resource } => {
                trace!(resource = %resource, "Transfer initiated")
            }
            TransferEvent::Started { resource } => info!(
                resource = %resource,
                size = resource.content_length,
                "Uploading"
            ),
            TransferEvent::Progress { resource, bytes } => {
                trace!(resource = %resource, bytes, "Transfer progress")
            }
            TransferEvent::Completed {
                resource,
                transferred,
            } => info!(resource = %resource, transferred, "Uploaded"),
            TransferEvent::Failed { resource, error } => {
                warn!(resource = %resource, error = %error, "Upload failed")
            }
        }
    }
}
