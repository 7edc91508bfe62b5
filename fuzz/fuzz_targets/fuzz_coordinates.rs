#![no_main]

use artifact_deployer::{Artifact, ArtifactCoordinates, ArtifactRepository};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(coords) = ArtifactCoordinates::parse(input) {
            // Accepted coordinates must always map to a path inside the repository
            let repository = ArtifactRepository::local("fuzz", "/repo");
            let path = repository.local_path_of(&Artifact::new(coords));
            assert!(path.starts_with("/repo"));
        }
    }
});
