//! Reusable fixtures

use artifact_deployer::domain::entities::{ExecutionRequest, Session};
use artifact_deployer::domain::value_objects::{
    ArtifactCoordinates, ProxySettings, ServerSettings,
};
use artifact_deployer::{Artifact, ArtifactRepository};

pub const JAR_CONTENT: &[u8] = b"PK\x03\x04 fake jar content";

pub fn lib_coordinates() -> ArtifactCoordinates {
    ArtifactCoordinates::new("com.example", "lib", "1.0")
}

pub fn lib_artifact() -> Artifact {
    Artifact::new(lib_coordinates())
}

pub fn https_releases() -> ArtifactRepository {
    ArtifactRepository::new("releases", "https://repo.example.com/releases")
        .expect("valid repository URL")
}

/// Session with one matching proxy and one matching server for `releases`
pub fn corporate_session() -> Session {
    Session::new(
        ExecutionRequest::new()
            .with_proxies(vec![ProxySettings::new("https", "proxy.corp", 3128)])
            .with_servers(vec![
                ServerSettings::new("releases").with_credentials("ci", "secret")
            ]),
    )
}
