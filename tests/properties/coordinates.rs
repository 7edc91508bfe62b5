//! Coordinates parsing and repository layout

use proptest::prelude::*;

use artifact_deployer::{Artifact, ArtifactCoordinates, ArtifactRepository};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,11}"
}

fn group() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|parts| parts.join("."))
}

fn version() -> impl Strategy<Value = String> {
    ("[0-9]{1,3}", "[0-9]{1,3}", prop::bool::ANY).prop_map(|(major, minor, snapshot)| {
        let base = format!("{major}.{minor}");
        if snapshot {
            format!("{base}-SNAPSHOT")
        } else {
            base
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn parse_never_panics(input in ".{0,64}") {
        let _ = ArtifactCoordinates::parse(&input);
    }

    #[test]
    fn display_parses_back(group in group(), artifact in segment(), version in version()) {
        let coords = ArtifactCoordinates::new(group, artifact, version);
        let reparsed = ArtifactCoordinates::parse(&coords.to_string()).unwrap();
        prop_assert_eq!(reparsed, coords);
    }

    #[test]
    fn default_layout_nests_group_directories(
        group in group(),
        artifact in segment(),
        version in version(),
    ) {
        let coords = ArtifactCoordinates::new(group.clone(), artifact.clone(), version.clone());
        let repository = ArtifactRepository::local("releases", "/srv/releases");
        let path = repository.path_of(&Artifact::new(coords));

        let prefix = format!("{}/{}/{}/", group.replace('.', "/"), artifact, version);
        prop_assert!(path.starts_with(&prefix), "{} does not start with {}", path, prefix);
        prop_assert_eq!(path.matches('/').count(), group.split('.').count() + 2);
    }

    #[test]
    fn snapshot_detection_follows_suffix(version in version()) {
        let coords = ArtifactCoordinates::new("g", "a", version.clone());
        prop_assert_eq!(coords.is_snapshot(), version.ends_with("-SNAPSHOT"));
    }
}
