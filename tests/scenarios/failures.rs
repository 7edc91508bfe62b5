//! Failure propagation with real adapters

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use artifact_deployer::application::{DeployPhase, DeploymentError};
use artifact_deployer::domain::ports::TransferError;
use artifact_deployer::domain::services::SettingsRepositorySystem;
use artifact_deployer::infrastructure::LocalFs;
use artifact_deployer::presentation::factory::{create_deploy_use_case, create_transformation};
use artifact_deployer::{ArtifactRepository, DeployUseCase};

use crate::common::*;

#[test]
fn unsupported_protocol_is_a_transfer_failure() {
    let build = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let source = build.path().join("lib-1.0.jar");
    fs::write(&source, JAR_CONTENT).unwrap();

    let mut artifact = lib_artifact().with_file(&source);
    let local = ArtifactRepository::local("local", local_dir.path());

    let err = create_deploy_use_case(create_transformation(true, true))
        .deploy(&source, &mut artifact, &https_releases(), &local, None)
        .unwrap_err();

    assert_eq!(err.phase(), DeployPhase::Upload);
    assert!(matches!(
        err,
        DeploymentError::Transfer(TransferError::UnsupportedProtocol { .. })
    ));
    assert!(err.to_string().starts_with("Error deploying artifact: "));

    // The local copy happens before the upload and is kept
    assert!(local.local_path_of(&artifact).is_file());
    // Nothing is published after a failed upload
    let local_pointer = local_dir
        .path()
        .join("com/example/lib/maven-metadata-releases.xml");
    assert!(!local_pointer.exists());
}

#[test]
fn missing_source_fails_in_transformation_when_checksums_are_on() {
    let build = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();
    let source = build.path().join("never-built.jar");

    let mut artifact = lib_artifact().with_file(&source);
    let deployment = ArtifactRepository::local("releases", remote_dir.path());
    let local = ArtifactRepository::local("local", local_dir.path());

    let err = create_deploy_use_case(create_transformation(true, false))
        .deploy(&source, &mut artifact, &deployment, &local, None)
        .unwrap_err();

    assert_eq!(err.phase(), DeployPhase::Transformation);
    assert!(fs::read_dir(local_dir.path()).unwrap().next().is_none());
    assert!(fs::read_dir(remote_dir.path()).unwrap().next().is_none());
}

#[test]
fn upload_failure_stops_metadata() {
    let build = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let source = build.path().join("lib-1.0.jar");
    fs::write(&source, JAR_CONTENT).unwrap();

    let log = call_log();
    let use_case = DeployUseCase::new(
        LocalFs::new(),
        Arc::new(SettingsRepositorySystem::new()),
        Box::new(create_transformation(false, true)),
        Arc::new(RecordingUploader::failing(log.clone())),
        Arc::new(RecordingPublisher::new(log.clone())),
    );
    let mut artifact = lib_artifact();
    let local = ArtifactRepository::local("local", local_dir.path());

    let err = use_case
        .deploy(&source, &mut artifact, &https_releases(), &local, None)
        .unwrap_err();

    assert_eq!(err.phase(), DeployPhase::Upload);
    assert!(err.to_string().contains("503 Service Unavailable"));
    assert_eq!(count(&log, "upload "), 1);
    assert_eq!(count(&log, "publish "), 0);
}

#[test]
fn metadata_store_failure_is_reported_as_metadata_error() {
    let build = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();
    let source = build.path().join("lib-1.0.jar");
    fs::write(&source, JAR_CONTENT).unwrap();

    // A directory where the cached pointer should be blocks reading and writing it
    let local = ArtifactRepository::local("local", local_dir.path());
    let mut artifact = lib_artifact().with_file(&source);
    let artifact_dir = local_dir.path().join("com/example/lib");
    fs::create_dir_all(&artifact_dir).unwrap();
    fs::create_dir_all(artifact_dir.join("maven-metadata-releases.xml")).unwrap();

    let deployment = ArtifactRepository::local("releases", remote_dir.path());
    let err = create_deploy_use_case(create_transformation(false, true))
        .deploy(&source, &mut artifact, &deployment, &local, None)
        .unwrap_err();

    assert_eq!(err.phase(), DeployPhase::Metadata);
    assert!(err
        .to_string()
        .starts_with("Error installing artifact's metadata: "));
    // The artifact itself was already uploaded
    assert!(remote_dir
        .path()
        .join("com/example/lib/1.0/lib-1.0.jar")
        .is_file());
}
