//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::config::ProgressMode;
use crate::domain::ports::{RemoteUploader, TransferListener};
use crate::domain::services::SettingsRepositorySystem;
use crate::infrastructure::{
    ChecksumTransformation, FileUploader, JsonTransferListener, LocalFs,
    LoggingTransferListener, RepositoryMetadataPublisher, TransformationChain,
    VersionPointerTransformation,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<LocalFs>;

/// Transformation chain for the enabled features
///
/// Checksums run first so the version pointer never sees stale items.
pub fn create_transformation(checksums: bool, version_pointer: bool) -> TransformationChain {
    let mut chain = TransformationChain::new();
    if checksums {
        chain.push(Box::new(ChecksumTransformation::default()));
    }
    if version_pointer {
        chain.push(Box::new(VersionPointerTransformation::new()));
    }
    chain
}

/// Create a deploy use case with all dependencies wired up
///
/// The metadata publisher shares the artifact uploader and stores through
/// the same file system port.
pub fn create_deploy_use_case(transformation: TransformationChain) -> ConcreteDeployUseCase {
    let uploader: Arc<dyn RemoteUploader> = Arc::new(FileUploader::new());
    let metadata_publisher = Arc::new(RepositoryMetadataPublisher::new(
        LocalFs::new(),
        uploader.clone(),
    ));

    DeployUseCase::new(
        LocalFs::new(),
        Arc::new(SettingsRepositorySystem::new()),
        Box::new(transformation),
        uploader,
        metadata_publisher,
    )
}

/// Progress listener for the configured mode
///
/// `--json` always selects NDJSON. `Auto` logs on a terminal and stays
/// silent otherwise.
pub fn create_transfer_listener(
    mode: ProgressMode,
    json: bool,
    stderr_is_terminal: bool,
) -> Option<Arc<dyn TransferListener>> {
    let mode = match mode {
        _ if json => ProgressMode::Json,
        ProgressMode::Auto if stderr_is_terminal => ProgressMode::Log,
        ProgressMode::Auto => ProgressMode::None,
        explicit => explicit,
    };

    match mode {
        ProgressMode::Json => Some(Arc::new(JsonTransferListener::stdout())),
        ProgressMode::Log => Some(Arc::new(LoggingTransferListener::new())),
        ProgressMode::None | ProgressMode::Auto => None,
    }
}
