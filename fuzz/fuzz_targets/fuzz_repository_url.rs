#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(url) = std::str::from_utf8(data) {
        if let Ok(repository) = artifact_deployer::ArtifactRepository::new("fuzz", url) {
            let _ = repository.basedir();
            let _ = repository.host();
        }
    }
});
