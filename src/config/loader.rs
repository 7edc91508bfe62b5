//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{DeployerError, DeployerResult};

use super::types::{ProgressMode, Settings};
use super::ConfigWarning;

/// Overrides the home directory for user settings and the default local repository
pub const DEPLOYER_TEST_HOME_VAR: &str = "DEPLOYER_TEST_HOME";
/// Overrides `local_repository`
pub const ENV_LOCAL_REPOSITORY: &str = "DEPLOYER_LOCAL_REPOSITORY";
/// Overrides `output.progress`
pub const ENV_PROGRESS: &str = "DEPLOYER_PROGRESS";

const PROJECT_SETTINGS: &str = ".deployer/settings.toml";
const USER_SETTINGS_DIR: &str = "artifact-deployer";
const SETTINGS_FILE: &str = "settings.toml";

/// Home directory, honoring `DEPLOYER_TEST_HOME`
pub fn deployer_home_dir() -> Option<PathBuf> {
    std::env::var_os(DEPLOYER_TEST_HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// `<config dir>/artifact-deployer/settings.toml`
pub fn user_settings_path() -> Option<PathBuf> {
    let config_dir = match std::env::var_os(DEPLOYER_TEST_HOME_VAR).filter(|v| !v.is_empty()) {
        Some(home) => PathBuf::from(home).join(".config"),
        None => dirs::config_dir()?,
    };
    Some(config_dir.join(USER_SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn project_settings_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_SETTINGS)
}

/// Load settings and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployerResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployerError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Resolve the effective settings
///
/// An explicit path must exist. Otherwise the project file is tried, then the
/// user file, then defaults. Environment overrides apply last.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> DeployerResult<(Settings, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(DeployerError::SettingsNotFound {
                path: path.to_path_buf(),
            });
        }
        let (settings, warnings) = load_with_warnings(path)?;
        debug!(path = %path.display(), "Loaded settings");
        return Ok((with_env_overrides(settings), warnings));
    }

    let candidates = project_root
        .map(project_settings_path)
        .into_iter()
        .chain(user_settings_path());
    for path in candidates {
        if path.exists() {
            let (settings, warnings) = load_with_warnings(&path)?;
            debug!(path = %path.display(), "Loaded settings");
            return Ok((with_env_overrides(settings), warnings));
        }
    }

    debug!("No settings file found, using defaults");
    Ok((with_env_overrides(Settings::default()), Vec::new()))
}

/// Apply environment variable overrides (DEPLOYER_* prefix)
pub fn with_env_overrides(mut settings: Settings) -> Settings {
    if let Some(dir) = std::env::var_os(ENV_LOCAL_REPOSITORY).filter(|v| !v.is_empty()) {
        settings.local_repository = Some(PathBuf::from(dir));
    }

    if let Ok(value) = std::env::var(ENV_PROGRESS) {
        match value.parse::<ProgressMode>() {
            Ok(mode) => settings.output.progress = mode,
            Err(reason) => warn!(variable = ENV_PROGRESS, "{}", reason),
        }
    }

    settings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "local_repository",
        "output",
        "progress",
        "servers",
        "id",
        "username",
        "password",
        "private_key",
        "passphrase",
        "proxies",
        "active",
        "protocol",
        "host",
        "port",
        "non_proxy_hosts",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
