//! Release deploy into a file repository

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use artifact_deployer::domain::ports::MetadataPublisher;
use artifact_deployer::domain::value_objects::ChecksumAlgorithm;
use artifact_deployer::infrastructure::{FileUploader, RepositoryMetadataPublisher};
use artifact_deployer::presentation::factory::{create_deploy_use_case, create_transformation};
use artifact_deployer::{ArtifactCoordinates, ArtifactMetadata, ArtifactRepository};

use crate::common::*;

struct Dirs {
    build: TempDir,
    local: TempDir,
    remote: TempDir,
}

fn dirs() -> Dirs {
    Dirs {
        build: TempDir::new().unwrap(),
        local: TempDir::new().unwrap(),
        remote: TempDir::new().unwrap(),
    }
}

#[test]
fn release_lands_in_both_repositories() {
    let dirs = dirs();
    let source = dirs.build.path().join("lib-1.0.jar");
    fs::write(&source, JAR_CONTENT).unwrap();

    let use_case = create_deploy_use_case(create_transformation(true, true));
    let deployment = ArtifactRepository::local("releases", dirs.remote.path());
    let local = ArtifactRepository::local("local", dirs.local.path());
    let mut artifact = lib_artifact().with_file(&source);

    use_case
        .deploy(&source, &mut artifact, &deployment, &local, None)
        .unwrap();

    let version_dir = "com/example/lib/1.0";
    let remote_jar = dirs.remote.path().join(version_dir).join("lib-1.0.jar");
    let local_jar = dirs.local.path().join(version_dir).join("lib-1.0.jar");
    assert_eq!(fs::read(&remote_jar).unwrap(), JAR_CONTENT);
    assert_eq!(fs::read(&local_jar).unwrap(), JAR_CONTENT);

    for algorithm in ChecksumAlgorithm::ALL {
        let name = format!("lib-1.0.jar.{}", algorithm.extension());
        let expected = algorithm.digest(JAR_CONTENT);
        let remote = fs::read_to_string(dirs.remote.path().join(version_dir).join(&name)).unwrap();
        let local = fs::read_to_string(dirs.local.path().join(version_dir).join(&name)).unwrap();
        assert!(expected.matches_str(&remote), "{name}: {remote}");
        assert!(expected.matches_str(&local), "{name}: {local}");
    }
}

#[test]
fn version_pointer_is_named_per_repository_locally() {
    let dirs = dirs();
    let source = dirs.build.path().join("lib-1.0.jar");
    fs::write(&source, JAR_CONTENT).unwrap();

    let use_case = create_deploy_use_case(create_transformation(false, true));
    let deployment = ArtifactRepository::local("releases", dirs.remote.path());
    let local = ArtifactRepository::local("local", dirs.local.path());
    let mut artifact = lib_artifact().with_file(&source);

    use_case
        .deploy(&source, &mut artifact, &deployment, &local, None)
        .unwrap();

    let remote_pointer = dirs.remote.path().join("com/example/lib/maven-metadata.xml");
    let local_pointer = dirs
        .local
        .path()
        .join("com/example/lib/maven-metadata-releases.xml");
    let remote = fs::read_to_string(&remote_pointer).unwrap();
    assert_eq!(remote, fs::read_to_string(&local_pointer).unwrap());
    assert!(remote.contains("<latest>1.0</latest>"));
    assert!(remote.contains("<release>1.0</release>"));
    assert!(!dirs
        .local
        .path()
        .join("com/example/lib/maven-metadata.xml")
        .exists());
}

#[test]
fn file_url_repository_is_equivalent_to_directory() {
    let dirs = dirs();
    let source = dirs.build.path().join("lib-1.0.jar");
    fs::write(&source, JAR_CONTENT).unwrap();

    let url = url::Url::from_directory_path(dirs.remote.path()).unwrap();
    let deployment = ArtifactRepository::new("releases", url.as_str()).unwrap();
    let local = ArtifactRepository::local("local", dirs.local.path());
    let use_case = create_deploy_use_case(create_transformation(false, false));
    let mut artifact = lib_artifact().with_file(&source);

    use_case
        .deploy(&source, &mut artifact, &deployment, &local, None)
        .unwrap();

    assert!(dirs
        .remote
        .path()
        .join("com/example/lib/1.0/lib-1.0.jar")
        .is_file());
    assert!(artifact.metadata().is_empty());
}

#[test]
fn deploying_from_the_local_repository_leaves_it_alone() {
    let dirs = dirs();
    let local = ArtifactRepository::local("local", dirs.local.path());
    let artifact_template = lib_artifact();
    let in_place = local.local_path_of(&artifact_template);
    fs::create_dir_all(in_place.parent().unwrap()).unwrap();
    fs::write(&in_place, JAR_CONTENT).unwrap();

    let deployment = ArtifactRepository::local("releases", dirs.remote.path());
    let use_case = create_deploy_use_case(create_transformation(true, false));
    let mut artifact = artifact_template.with_file(&in_place);

    use_case
        .deploy(&in_place, &mut artifact, &deployment, &local, None)
        .unwrap();

    assert_eq!(fs::read(&in_place).unwrap(), JAR_CONTENT);
    assert!(dirs
        .remote
        .path()
        .join("com/example/lib/1.0/lib-1.0.jar.sha256")
        .is_file());
}

#[test]
fn classifier_and_type_shape_the_file_name() {
    let dirs = dirs();
    let source = dirs.build.path().join("lib-1.0-sources.zip");
    fs::write(&source, b"zip bytes").unwrap();

    let coords = artifact_deployer::ArtifactCoordinates::parse("com.example:lib:1.0:zip:sources")
        .unwrap();
    let mut artifact = artifact_deployer::Artifact::new(coords).with_file(&source);
    let deployment = ArtifactRepository::local("releases", dirs.remote.path());
    let local = ArtifactRepository::local("local", dirs.local.path());
    let use_case = create_deploy_use_case(create_transformation(true, false));

    use_case
        .deploy(&source, &mut artifact, &deployment, &local, None)
        .unwrap();

    let version_dir = dirs.remote.path().join("com/example/lib/1.0");
    assert!(version_dir.join("lib-1.0-sources.zip").is_file());
    assert!(version_dir.join("lib-1.0-sources.zip.sha512").is_file());
}

#[test]
fn version_pointer_is_read_and_stored_through_the_file_system() {
    let dirs = dirs();
    let log = call_log();
    let publisher = RepositoryMetadataPublisher::new(
        CountingFs::new(log.clone()),
        Arc::new(FileUploader::new()),
    );
    let deployment = ArtifactRepository::local("releases", dirs.remote.path());
    let local = ArtifactRepository::local("local", dirs.local.path());

    for version in ["1.0", "1.1"] {
        let coords = ArtifactCoordinates::new("com.example", "lib", version);
        publisher
            .publish(
                &ArtifactMetadata::version_pointer(&coords, version, Some(version)),
                &local,
                &deployment,
            )
            .unwrap();
    }

    let cached = dirs
        .local
        .path()
        .join("com/example/lib/maven-metadata-releases.xml");
    let remote = dirs.remote.path().join("com/example/lib/maven-metadata.xml");
    assert_eq!(count(&log, &format!("fs:write {}", cached.display())), 2);
    // Only the second publish finds something to merge with
    assert_eq!(count(&log, &format!("fs:read {}", remote.display())), 1);

    let pointer = fs::read_to_string(&remote).unwrap();
    assert!(pointer.contains("<version>1.0</version>"));
    assert!(pointer.contains("<release>1.1</release>"));
}
