//! Snapshot redeploys

use std::fs;

use tempfile::TempDir;

use artifact_deployer::domain::value_objects::ChecksumAlgorithm;
use artifact_deployer::presentation::factory::{create_deploy_use_case, create_transformation};
use artifact_deployer::{Artifact, ArtifactCoordinates, ArtifactRepository};

#[test]
fn redeploying_a_snapshot_replaces_file_and_checksums() {
    let build = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();
    let source = build.path().join("lib-2.0-SNAPSHOT.jar");

    let coords = ArtifactCoordinates::new("com.example", "lib", "2.0-SNAPSHOT");
    let deployment = ArtifactRepository::local("snapshots", remote_dir.path());
    let local = ArtifactRepository::local("local", local_dir.path());
    let use_case = create_deploy_use_case(create_transformation(true, true));

    for content in [b"first build".as_slice(), b"second build".as_slice()] {
        fs::write(&source, content).unwrap();
        let mut artifact = Artifact::new(coords.clone()).with_file(&source);
        use_case
            .deploy(&source, &mut artifact, &deployment, &local, None)
            .unwrap();
    }

    let version_dir = remote_dir.path().join("com/example/lib/2.0-SNAPSHOT");
    assert_eq!(
        fs::read(version_dir.join("lib-2.0-SNAPSHOT.jar")).unwrap(),
        b"second build"
    );
    let sha = fs::read_to_string(version_dir.join("lib-2.0-SNAPSHOT.jar.sha256")).unwrap();
    assert_eq!(
        sha.trim(),
        ChecksumAlgorithm::Sha256.digest(b"second build").hex()
    );
}

#[test]
fn snapshot_pointer_has_no_release() {
    let build = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();
    let source = build.path().join("lib.jar");
    fs::write(&source, b"bytes").unwrap();

    let coords = ArtifactCoordinates::new("com.example", "lib", "2.0-SNAPSHOT");
    let mut artifact = Artifact::new(coords).with_file(&source);
    let deployment = ArtifactRepository::local("snapshots", remote_dir.path());
    let local = ArtifactRepository::local("local", local_dir.path());

    create_deploy_use_case(create_transformation(false, true))
        .deploy(&source, &mut artifact, &deployment, &local, None)
        .unwrap();

    let pointer =
        fs::read_to_string(remote_dir.path().join("com/example/lib/maven-metadata.xml")).unwrap();
    assert!(pointer.contains("<latest>2.0-SNAPSHOT</latest>"));
    assert!(!pointer.contains("<release>"));
}

#[test]
fn snapshot_after_release_keeps_version_history() {
    let build = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();
    let source = build.path().join("lib.jar");
    fs::write(&source, b"bytes").unwrap();

    let deployment = ArtifactRepository::local("releases", remote_dir.path());
    let local = ArtifactRepository::local("local", local_dir.path());
    let use_case = create_deploy_use_case(create_transformation(false, true));

    for version in ["1.0", "1.1-SNAPSHOT"] {
        let coords = ArtifactCoordinates::new("com.example", "lib", version);
        let mut artifact = Artifact::new(coords).with_file(&source);
        use_case
            .deploy(&source, &mut artifact, &deployment, &local, None)
            .unwrap();
    }

    let pointer =
        fs::read_to_string(remote_dir.path().join("com/example/lib/maven-metadata.xml")).unwrap();
    assert!(pointer.contains("<version>1.0</version>"));
    assert!(pointer.contains("<version>1.1-SNAPSHOT</version>"));
    assert!(pointer.contains("<release>1.0</release>"));
    assert!(pointer.contains("<latest>1.1-SNAPSHOT</latest>"));

    let cached = fs::read_to_string(
        local_dir
            .path()
            .join("com/example/lib/maven-metadata-releases.xml"),
    )
    .unwrap();
    assert_eq!(cached, pointer);
}
