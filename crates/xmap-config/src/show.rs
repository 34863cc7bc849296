//! Show folder configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShowConfig {
    /// Directory holding `xlights_rgbeffects.xml`.
    #[serde(default)]
    pub folder: String,
}

impl ShowConfig {
    /// Whether a show folder has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.folder.is_empty()
    }
}
