//! Command handlers. Each module owns one subcommand; shared plumbing
//! (session resolution, catalog loading) lives here.

pub mod map;
pub mod models;
pub mod submodels;

use anyhow::Context;
use xmap_config::{ConfigError, XmapConfig};
use xmap_core::{Catalog, ShowSession};

use crate::cli::GlobalFlags;

/// Build the show session from the `--show-folder` flag or config.
pub fn resolve_session(flags: &GlobalFlags) -> anyhow::Result<ShowSession> {
    let config = XmapConfig::load_with_dotenv().context("failed to load xmap configuration")?;

    let folder = match &flags.show_folder {
        Some(folder) => folder.clone(),
        None if config.show.is_configured() => config.show.folder.clone(),
        None => {
            return Err(ConfigError::NotConfigured {
                section: "show".to_string(),
            }
            .into());
        }
    };

    let mut session = ShowSession::new(folder);
    if config.output.is_configured() {
        session = session.with_output_folder(&config.output.folder);
    }
    tracing::debug!(show = %session.show_folder().display(), "resolved show session");
    Ok(session)
}

/// Load the catalog for a session's effects file.
pub fn load_catalog(session: &ShowSession) -> anyhow::Result<Catalog> {
    let path = session.effects_path();
    Catalog::from_path(&path)
        .with_context(|| format!("failed to read models from {}", path.display()))
}
