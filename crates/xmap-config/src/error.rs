//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required configuration section is not configured.
    #[error(
        "Configuration section '{section}' is not configured (set it in \
         .xmap/config.toml or via XMAP_{}__* environment variables)",
        .section.to_uppercase()
    )]
    NotConfigured { section: String },
}
