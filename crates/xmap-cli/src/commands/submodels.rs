//! Handle `xmap submodels`.

use anyhow::bail;
use serde::Serialize;

use crate::cli::root_commands::SubmodelsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::table;

#[derive(Debug, Serialize)]
struct SubmodelsResponse {
    model: String,
    submodels: Vec<String>,
}

/// List a model's submodels in document order.
pub fn handle(args: &SubmodelsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = super::resolve_session(flags)?;
    let catalog = super::load_catalog(&session)?;

    let Some(model) = catalog.get(&args.model) else {
        bail!("unknown model '{}' (run 'xmap models' to list them)", args.model);
    };

    match flags.format {
        OutputFormat::Json => {
            let response = SubmodelsResponse {
                model: model.name.clone(),
                submodels: model.submodels.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = model
                .submodels
                .iter()
                .map(|name| vec![name.clone()])
                .collect();
            println!("{}", table::render(&["SUBMODEL"], &cells));
        }
    }
    Ok(())
}
