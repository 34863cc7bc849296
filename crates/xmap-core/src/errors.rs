//! Error types for the three core operations.
//!
//! Each operation fails with its own enum; nothing here is fatal to the
//! process. The CLI converges all of these into `anyhow::Error` with
//! operation context.

use std::path::PathBuf;

use thiserror::Error;

/// Catalog extraction failures. No partial catalog is ever returned.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The effects document does not exist at the expected location.
    #[error("effects file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Reading the effects document failed.
    #[error("failed to read effects file: {0}")]
    Io(#[from] std::io::Error),

    /// The effects document is not well-formed XML.
    #[error("malformed effects file: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Target resolution failures. The operation terminates without an
/// artifact; these are informational outcomes, not crashes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The explicit target list was empty.
    #[error("no mapping models selected")]
    EmptySelection,

    /// Auto matching found no model sharing the primary's base name.
    #[error("no models match '{primary}' by base name")]
    NoMatch { primary: String },

    /// The primary model is not in the catalog.
    #[error("unknown primary model: {name}")]
    UnknownPrimary { name: String },

    /// An explicit target is not in the catalog.
    #[error("unknown mapping model: {name}")]
    UnknownTarget { name: String },

    /// An explicit target names the primary model itself.
    #[error("mapping model '{name}' is the primary model")]
    TargetIsPrimary { name: String },
}

/// Mapping-file write failures. Any partially written file is removed
/// before the error is returned, so a failure means no artifact exists.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to write mapping file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
