//! JSON Transfer Listener
//!
//! Outputs transfer events as NDJSON for CI/automation consumption.

use crate::domain::ports::{TransferEvent, TransferListener, TransferResource};
use std::io::{self, Write};
use std::sync::Mutex;

/// Transfer listener that outputs NDJSON events to stdout
pub struct JsonTransferListener {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonTransferListener {
    /// Create a new JSON listener writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON listener writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn resource_fields(resource: &TransferResource) -> serde_json::Value {
    serde_json::json!({
        "resource": resource.name,
        "repository": resource.repository,
        "content_length": resource.content_length,
    })
}

impl TransferListener for JsonTransferListener {
    fn on_event(&self, event: TransferEvent) {
        let (name, mut json) = match &event {
            TransferEvent::Initiated { resource } => ("transfer_initiated", resource_fields(resource)),
            TransferEvent::Started { resource } => ("transfer_started", resource_fields(resource)),
            TransferEvent::Progress { resource, bytes } => {
                let mut json = resource_fields(resource);
                json["bytes"] = serde_json::json!(bytes);
                ("transfer_progress", json)
            }
            TransferEvent::Completed {
                resource,
                transferred,
            } => {
                let mut json = resource_fields(resource);
                json["transferred"] = serde_json::json!(transferred);
                ("transfer_completed", json)
            }
            TransferEvent::Failed { resource, error } => {
                let mut json = resource_fields(resource);
                json["error"] = serde_json::json!(error);
                ("transfer_failed", json)
            }
        };
        json["event"] = serde_json::json!(name);

        self.write_event(json);
    }
}
