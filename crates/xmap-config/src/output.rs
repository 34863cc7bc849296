//! Artifact output configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where mapping artifacts are written. Empty means the show folder.
    #[serde(default)]
    pub folder: String,
}

impl OutputConfig {
    /// Whether an output folder override has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.folder.is_empty()
    }
}
