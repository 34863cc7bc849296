use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `xmap` binary.
#[derive(Debug, Parser)]
#[command(
    name = "xmap",
    version,
    about = "xmap - map a model and its submodels onto like models"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, json
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Show folder holding xlights_rgbeffects.xml (overrides config)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub show_folder: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            show_folder: self.show_folder.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
