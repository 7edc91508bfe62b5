//! Settings module for the deployer
//!
//! Settings hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOYER_*)
//! 3. Explicit `--settings` file, or project `.deployer/settings.toml`
//! 4. User settings (`<config dir>/artifact-deployer/settings.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    deployer_home_dir, load_with_warnings, project_settings_path, resolve, user_settings_path,
    with_env_overrides, DEPLOYER_TEST_HOME_VAR, ENV_LOCAL_REPOSITORY, ENV_PROGRESS,
};
pub use types::{OutputConfig, ProgressMode, Settings};
