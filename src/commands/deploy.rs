//! `deploy` and `deploy-legacy` commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use tracing::{debug, warn};

use artifact_deployer::application::legacy_source_path;
use artifact_deployer::config::{self, Settings};
use artifact_deployer::domain::entities::{Artifact, ArtifactRepository, Session};
use artifact_deployer::domain::value_objects::ArtifactCoordinates;
use artifact_deployer::presentation::factory::{
    create_deploy_use_case, create_transfer_listener, create_transformation,
    ConcreteDeployUseCase,
};
use artifact_deployer::presentation::DeploySummary;

use crate::cli::TargetArgs;

/// Id of the local repository
const LOCAL_REPOSITORY_ID: &str = "local";

/// Everything a deploy needs, resolved from flags and settings
struct Prepared {
    artifact: Artifact,
    deployment_repository: ArtifactRepository,
    local_repository: ArtifactRepository,
    session: Session,
    use_case: ConcreteDeployUseCase,
}

fn prepare(settings_path: Option<&Path>, json: bool, target: &TargetArgs) -> Result<Prepared> {
    let coordinates = ArtifactCoordinates::parse(&target.coordinates)?;

    let project_root = std::env::current_dir().ok();
    let (settings, warnings) = config::resolve(settings_path, project_root.as_deref())
        .context("Failed to load settings")?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let deployment_repository =
        deployment_repository(&target.repository_id, &target.repository_url)?;
    let local_repository = local_repository(&settings, target.local_repository.as_deref());
    debug!(
        deployment = %deployment_repository,
        local = %local_repository,
        "Resolved repositories"
    );

    let listener = create_transfer_listener(
        settings.output.progress,
        json,
        std::io::stderr().is_terminal(),
    );
    let session = settings.to_session(listener);

    let use_case = create_deploy_use_case(create_transformation(
        !target.no_checksums,
        !target.no_version_pointer,
    ));

    Ok(Prepared {
        artifact: Artifact::new(coordinates),
        deployment_repository,
        local_repository,
        session,
        use_case,
    })
}

/// URLs go through `ArtifactRepository::new`; anything else is a directory
fn deployment_repository(id: &str, location: &str) -> Result<ArtifactRepository> {
    if location.contains("://") || location.starts_with("file:") {
        return Ok(ArtifactRepository::new(id, location)?);
    }
    let path = PathBuf::from(location);
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .context("Failed to resolve current directory")?
            .join(path)
    };
    Ok(ArtifactRepository::local(id, path))
}

fn local_repository(settings: &Settings, flag: Option<&Path>) -> ArtifactRepository {
    let basedir = flag
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.local_repository_or_default());
    ArtifactRepository::local(LOCAL_REPOSITORY_ID, basedir)
}

fn report(prepared: &Prepared, json: bool) -> Result<()> {
    let summary = DeploySummary::new(
        &prepared.artifact,
        &prepared.deployment_repository,
        &prepared.local_repository,
    );
    let mut out = std::io::stdout().lock();
    if json {
        summary.render_json(&mut out)?;
    } else {
        summary.render_text(&mut out)?;
    }
    Ok(())
}

pub fn cmd_deploy(
    settings_path: Option<&Path>,
    json: bool,
    file: &Path,
    target: &TargetArgs,
) -> Result<()> {
    let mut prepared = prepare(settings_path, json, target)?;
    prepared.artifact.set_file(file);

    prepared
        .use_case
        .deploy(
            file,
            &mut prepared.artifact,
            &prepared.deployment_repository,
            &prepared.local_repository,
            Some(&prepared.session),
        )
        .with_context(|| format!("Failed to deploy {}", file.display()))?;

    report(&prepared, json)
}

pub fn cmd_deploy_legacy(
    settings_path: Option<&Path>,
    json: bool,
    basedir: &Path,
    final_name: &str,
    target: &TargetArgs,
) -> Result<()> {
    let mut prepared = prepare(settings_path, json, target)?;
    let file = legacy_source_path(basedir, final_name, &prepared.artifact);
    prepared.artifact.set_file(&file);

    prepared
        .use_case
        .deploy_from_basedir(
            basedir,
            final_name,
            &mut prepared.artifact,
            &prepared.deployment_repository,
            &prepared.local_repository,
            Some(&prepared.session),
        )
        .with_context(|| format!("Failed to deploy {}", file.display()))?;

    report(&prepared, json)
}
