use clap::{Args, Subcommand};

/// Subcommands of the `xmap` binary.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the models in the show's effects file
    Models(ModelsArgs),

    /// List a model's submodels in document order
    Submodels(SubmodelsArgs),

    /// Generate a mapping file from a primary model onto target models
    Map(MapArgs),
}

#[derive(Debug, Args)]
pub struct ModelsArgs {
    /// Only models sharing this model's base name
    #[arg(long, value_name = "MODEL")]
    pub like: Option<String>,
}

#[derive(Debug, Args)]
pub struct SubmodelsArgs {
    /// Model whose submodels to list
    pub model: String,
}

#[derive(Debug, Args)]
pub struct MapArgs {
    /// Primary model whose effects will be mapped onto the targets
    #[arg(short, long, value_name = "MODEL")]
    pub primary: String,

    /// Explicit target model; repeat for several, in mapping order
    #[arg(long = "target", value_name = "MODEL", conflicts_with = "auto")]
    pub targets: Vec<String>,

    /// Match targets automatically by base name
    #[arg(long)]
    pub auto: bool,
}
