//! Local cache synchronization

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use artifact_deployer::application::{LocalCacheSync, LocalCacheSynchronizer};
use artifact_deployer::infrastructure::LocalFs;
use artifact_deployer::ArtifactRepository;

use crate::common::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn cached_copy_matches_source(content in prop::collection::vec(any::<u8>(), 0..4096)) {
        let build = TempDir::new().unwrap();
        let local_dir = TempDir::new().unwrap();
        let source = build.path().join("lib-1.0.jar");
        fs::write(&source, &content).unwrap();

        let local = ArtifactRepository::local("local", local_dir.path());
        let sync = LocalCacheSynchronizer::new(LocalFs::new())
            .sync(&source, &local, &lib_artifact())
            .unwrap();

        let is_copied = matches!(sync, LocalCacheSync::Copied { bytes, .. } if bytes == content.len() as u64);
        prop_assert!(is_copied);
        prop_assert_eq!(fs::read(sync.target()).unwrap(), content);
    }

    #[test]
    fn syncing_twice_keeps_the_latest_bytes(
        first in prop::collection::vec(any::<u8>(), 0..512),
        second in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let build = TempDir::new().unwrap();
        let local_dir = TempDir::new().unwrap();
        let source = build.path().join("lib-1.0.jar");
        let local = ArtifactRepository::local("local", local_dir.path());
        let synchronizer = LocalCacheSynchronizer::new(LocalFs::new());

        fs::write(&source, &first).unwrap();
        synchronizer.sync(&source, &local, &lib_artifact()).unwrap();
        fs::write(&source, &second).unwrap();
        let sync = synchronizer.sync(&source, &local, &lib_artifact()).unwrap();

        prop_assert_eq!(fs::read(sync.target()).unwrap(), second);
    }

    #[test]
    fn in_place_source_is_never_touched(content in prop::collection::vec(any::<u8>(), 1..1024)) {
        let local_dir = TempDir::new().unwrap();
        let local = ArtifactRepository::local("local", local_dir.path());
        let log = call_log();
        let synchronizer = LocalCacheSynchronizer::new(CountingFs::new(log.clone()));

        let target = synchronizer.target_for(&local, &lib_artifact());
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, &content).unwrap();

        let sync = synchronizer.sync(&target, &local, &lib_artifact()).unwrap();

        let unchanged = matches!(sync, LocalCacheSync::Unchanged { .. });
        prop_assert!(unchanged);
        prop_assert_eq!(calls(&log).len(), 0);
        prop_assert_eq!(fs::read(&target).unwrap(), content);
    }
}
