//! Handle `xmap map`: extract, resolve, write.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use xmap_core::{ResolveError, Selection, ShowSession, artifact, resolve_targets};

use crate::cli::root_commands::MapArgs;
use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Debug, Serialize)]
struct MapResponse {
    artifact: PathBuf,
    primary: String,
    targets: Vec<String>,
}

/// Run the mapping pipeline and report the artifact path.
pub fn handle(args: &MapArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = super::resolve_session(flags)?;
    let selection = if args.auto {
        Selection::Auto
    } else {
        Selection::Explicit(args.targets.clone())
    };
    let date = chrono::Local::now().date_naive();

    let (path, targets) = run_map(&session, &args.primary, &selection, date)?;

    match flags.format {
        OutputFormat::Json => {
            let response = MapResponse {
                artifact: path,
                primary: args.primary.clone(),
                targets,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Table => {
            println!(
                "Mapping file {} created ({} target models)",
                path.display(),
                targets.len()
            );
        }
    }
    Ok(())
}

/// Extract the catalog, resolve targets, and write the artifact.
///
/// Resolution failure means no file is written at all.
fn run_map(
    session: &ShowSession,
    primary: &str,
    selection: &Selection,
    date: NaiveDate,
) -> anyhow::Result<(PathBuf, Vec<String>)> {
    let catalog = super::load_catalog(session)?;

    let model = catalog
        .get(primary)
        .ok_or_else(|| ResolveError::UnknownPrimary {
            name: primary.to_string(),
        })?;

    let targets = resolve_targets(&catalog, primary, selection)
        .with_context(|| format!("failed to resolve mapping targets for '{primary}'"))?;

    let path = session.artifact_path(primary, date);
    artifact::write(&path, primary, &model.submodels, &targets)
        .with_context(|| format!("failed to write mapping file for '{primary}'"))?;

    Ok((path, targets))
}
