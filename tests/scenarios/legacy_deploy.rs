//! `basedir/final_name.<extension>` entry point

use std::fs;

use tempfile::TempDir;

use artifact_deployer::application::{legacy_source_path, DeploymentError};
use artifact_deployer::domain::entities::ArtifactHandler;
use artifact_deployer::presentation::factory::{create_deploy_use_case, create_transformation};
use artifact_deployer::ArtifactRepository;

use crate::common::*;

#[test]
fn legacy_entry_point_deploys_final_name() {
    let basedir = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();
    fs::write(basedir.path().join("my-build.jar"), JAR_CONTENT).unwrap();

    let mut artifact = lib_artifact();
    let source = legacy_source_path(basedir.path(), "my-build", &artifact);
    artifact.set_file(&source);
    let deployment = ArtifactRepository::local("releases", remote_dir.path());
    let local = ArtifactRepository::local("local", local_dir.path());

    create_deploy_use_case(create_transformation(true, false))
        .deploy_from_basedir(
            basedir.path(),
            "my-build",
            &mut artifact,
            &deployment,
            &local,
            None,
        )
        .unwrap();

    // The repository file name comes from the coordinates, not the final name
    let deployed = remote_dir.path().join("com/example/lib/1.0/lib-1.0.jar");
    assert_eq!(fs::read(deployed).unwrap(), JAR_CONTENT);
}

#[test]
fn legacy_extension_follows_the_handler() {
    let basedir = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();
    fs::write(basedir.path().join("app.war"), b"war").unwrap();

    let mut artifact = lib_artifact().with_handler(ArtifactHandler::new("war"));
    let deployment = ArtifactRepository::local("releases", remote_dir.path());
    let local = ArtifactRepository::local("local", local_dir.path());

    create_deploy_use_case(create_transformation(false, false))
        .deploy_from_basedir(basedir.path(), "app", &mut artifact, &deployment, &local, None)
        .unwrap();

    assert!(remote_dir
        .path()
        .join("com/example/lib/1.0/lib-1.0.war")
        .is_file());
}

#[test]
fn missing_legacy_file_fails_before_upload() {
    let basedir = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();

    let mut artifact = lib_artifact();
    let deployment = ArtifactRepository::local("releases", remote_dir.path());
    let local = ArtifactRepository::local("local", local_dir.path());

    let err = create_deploy_use_case(create_transformation(false, false))
        .deploy_from_basedir(basedir.path(), "absent", &mut artifact, &deployment, &local, None)
        .unwrap_err();

    assert!(matches!(err, DeploymentError::LocalCopy { .. }));
    assert!(!remote_dir.path().join("com").exists());
}
