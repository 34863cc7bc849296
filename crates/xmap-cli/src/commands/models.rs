//! Handle `xmap models`.

use serde::Serialize;
use xmap_core::{Catalog, base_name};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::ModelsArgs;
use crate::output::table;

#[derive(Debug, Serialize)]
struct ModelRow {
    name: String,
    description: String,
    submodels: usize,
}

#[derive(Debug, Serialize)]
struct ModelsResponse {
    models: Vec<ModelRow>,
}

/// List catalog models, ascending by name.
pub fn handle(args: &ModelsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = super::resolve_session(flags)?;
    let catalog = super::load_catalog(&session)?;
    let rows = collect_rows(&catalog, args.like.as_deref());

    match flags.format {
        OutputFormat::Json => {
            let response = ModelsResponse { models: rows };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|row| {
                    vec![
                        row.name.clone(),
                        row.description.clone(),
                        row.submodels.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(&["MODEL", "DESCRIPTION", "SUBMODELS"], &cells)
            );
        }
    }
    Ok(())
}

fn collect_rows(catalog: &Catalog, like: Option<&str>) -> Vec<ModelRow> {
    catalog
        .models()
        .filter(|model| match like {
            Some(like) => base_name(&model.name) == base_name(like),
            None => true,
        })
        .map(|model| ModelRow {
            name: model.name.clone(),
            description: model.description.clone(),
            submodels: model.submodels.len(),
        })
        .collect()
}
