//! Repository enrichment

use std::sync::Arc;

use proptest::prelude::*;

use artifact_deployer::domain::entities::{ExecutionRequest, RepositoryKind, Session};
use artifact_deployer::domain::services::{RepositoryAuthenticator, SettingsRepositorySystem};
use artifact_deployer::domain::value_objects::{Authentication, ProxySettings, ServerSettings};
use artifact_deployer::ArtifactRepository;

fn authenticator() -> RepositoryAuthenticator {
    RepositoryAuthenticator::new(Arc::new(SettingsRepositorySystem::new()))
}

fn repository_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["releases", "snapshots", "internal", "thirdparty"])
        .prop_map(str::to_string)
}

fn servers() -> impl Strategy<Value = Vec<ServerSettings>> {
    prop::collection::vec(
        (repository_id(), "[a-z]{1,8}", "[a-z0-9]{1,8}")
            .prop_map(|(id, user, pw)| ServerSettings::new(id).with_credentials(user, pw)),
        0..4,
    )
}

fn proxies() -> impl Strategy<Value = Vec<ProxySettings>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["http", "https", "HTTPS"]),
            "[a-z]{1,8}\\.corp",
            1024u16..65535,
            prop::bool::ANY,
        )
            .prop_map(|(protocol, host, port, active)| {
                ProxySettings::new(protocol, host, port).with_active(active)
            }),
        0..4,
    )
}

fn session() -> impl Strategy<Value = Session> {
    (servers(), proxies()).prop_map(|(servers, proxies)| {
        Session::new(
            ExecutionRequest::new()
                .with_servers(servers)
                .with_proxies(proxies),
        )
    })
}

fn repository(id: &str) -> ArtifactRepository {
    ArtifactRepository::new(id, "https://repo.example.com/maven").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn caller_repository_is_never_modified(id in repository_id(), session in session()) {
        let original = repository(&id);
        let snapshot = original.clone();

        let _ = authenticator().enrich(&original, Some(&session));

        prop_assert_eq!(original, snapshot);
    }

    #[test]
    fn existing_authentication_wins(id in repository_id(), session in session()) {
        let preauthenticated =
            repository(&id).with_authentication(Authentication::new("owner", "pw"));

        let enriched = authenticator().enrich(&preauthenticated, Some(&session));

        prop_assert_eq!(enriched, preauthenticated);
    }

    #[test]
    fn custom_repositories_pass_through(id in repository_id(), session in session()) {
        let custom = repository(&id).with_kind(RepositoryKind::Custom);
        prop_assert_eq!(authenticator().enrich(&custom, Some(&session)), custom);
    }

    #[test]
    fn credentials_come_from_the_first_matching_server(
        id in repository_id(),
        servers in servers(),
    ) {
        let session = Session::new(ExecutionRequest::new().with_servers(servers.clone()));
        let enriched = authenticator().enrich(&repository(&id), Some(&session));

        let expected = servers.iter().find(|s| s.id == id).and_then(|s| s.username.clone());
        prop_assert_eq!(
            enriched.authentication().and_then(|a| a.username().map(str::to_string)),
            expected
        );
    }

    #[test]
    fn only_active_https_proxies_are_injected(id in repository_id(), proxies in proxies()) {
        let session = Session::new(ExecutionRequest::new().with_proxies(proxies.clone()));
        let enriched = authenticator().enrich(&repository(&id), Some(&session));

        let expected = proxies
            .iter()
            .find(|p| p.active && p.protocol.eq_ignore_ascii_case("https"))
            .map(|p| p.host.clone());
        prop_assert_eq!(enriched.proxy().map(|p| p.host.clone()), expected);
    }

    #[test]
    fn enrichment_is_idempotent(id in repository_id(), session in session()) {
        let once = authenticator().enrich(&repository(&id), Some(&session));
        let twice = authenticator().enrich(&once, Some(&session));
        prop_assert_eq!(once, twice);
    }
}
