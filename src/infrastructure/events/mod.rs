//! Transfer Listener Implementations
//!
//! Provides concrete implementations of TransferListener:
//! - JsonTransferListener: NDJSON output for CI/automation
//! - LoggingTransferListener: tracing output for interactive use

mod json;
mod logging;

pub use json::JsonTransferListener;
pub use logging::LoggingTransferListener;
