//! Transfer Listener Adapter
//!
//! Turns the session's progress listener into the callback shape uploaders
//! expect. Every callback becomes exactly one `TransferEvent`, delivered
//! immediately and in call order.

use std::sync::Arc;

use crate::domain::entities::Session;
use crate::domain::ports::{TransferEvent, TransferListener, TransferResource, TransportListener};

/// Forwards transport callbacks to a session `TransferListener`
pub struct TransferListenerAdapter {
    inner: Arc<dyn TransferListener>,
}

impl TransferListenerAdapter {
    pub fn new(inner: Arc<dyn TransferListener>) -> Self {
        Self { inner }
    }

    /// Adapter for the session's listener; `None` without a session or listener
    pub fn adapt(session: Option<&Session>) -> Option<Self> {
        session?.transfer_listener().cloned().map(Self::new)
    }
}

impl TransportListener for TransferListenerAdapter {
    fn transfer_initiated(&self, resource: &TransferResource) {
        self.inner.on_event(TransferEvent::Initiated {
            resource: resource.clone(),
        });
    }

    fn transfer_started(&self, resource: &TransferResource) {
        self.inner.on_event(TransferEvent::Started {
            resource: resource.clone(),
        });
    }

    fn transfer_progress(&self, resource: &TransferResource, bytes: u64) {
        self.inner.on_event(TransferEvent::Progress {
            resource: resource.clone(),
            bytes,
        });
    }

    fn transfer_completed(&self, resource: &TransferResource, transferred: u64) {
        self.inner.on_event(TransferEvent::Completed {
            resource: resource.clone(),
            transferred,
        });
    }

    fn transfer_error(&self, resource: &TransferResource, error: &str) {
        self.inner.on_event(TransferEvent::Failed {
            resource: resource.clone(),
            error: error.to_string(),
        });
    }
}
