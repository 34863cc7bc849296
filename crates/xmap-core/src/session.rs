//! Show session paths.
//!
//! A session is the explicit per-run value carrying the show folder and
//! the folder artifacts land in. Every path the core touches derives
//! from it; no operation reads process-wide state.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::artifact;

/// Name of the effects description file inside a show folder.
pub const EFFECTS_FILE_NAME: &str = "xlights_rgbeffects.xml";

/// Folder context for one mapping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSession {
    show_folder: PathBuf,
    output_folder: PathBuf,
}

impl ShowSession {
    /// Session rooted at `show_folder`; artifacts land in the same folder.
    pub fn new(show_folder: impl Into<PathBuf>) -> Self {
        let show_folder = show_folder.into();
        Self {
            output_folder: show_folder.clone(),
            show_folder,
        }
    }

    /// Redirect generated artifacts to a different folder.
    #[must_use]
    pub fn with_output_folder(mut self, output_folder: impl Into<PathBuf>) -> Self {
        self.output_folder = output_folder.into();
        self
    }

    /// The show folder itself.
    #[must_use]
    pub fn show_folder(&self) -> &Path {
        &self.show_folder
    }

    /// Path of the effects description file for this show.
    #[must_use]
    pub fn effects_path(&self) -> PathBuf {
        self.show_folder.join(EFFECTS_FILE_NAME)
    }

    /// Destination path for a mapping artifact generated on `date`.
    #[must_use]
    pub fn artifact_path(&self, primary: &str, date: NaiveDate) -> PathBuf {
        self.output_folder.join(artifact::file_name(primary, date))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn effects_path_is_inside_the_show_folder() {
        let session = ShowSession::new("/shows/2025");
        assert_eq!(
            session.effects_path(),
            PathBuf::from("/shows/2025/xlights_rgbeffects.xml")
        );
    }

    #[test]
    fn artifact_path_defaults_to_the_show_folder() {
        let session = ShowSession::new("/shows/2025");
        let date = NaiveDate::from_ymd_opt(2025, 6, 16).expect("valid date");
        assert_eq!(
            session.artifact_path("Tree-1", date),
            PathBuf::from("/shows/2025/Tree-1_mapping_2025_06_16.xmap")
        );
    }

    #[test]
    fn output_folder_override_redirects_artifacts_only() {
        let session = ShowSession::new("/shows/2025").with_output_folder("/tmp/out");
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid date");
        assert_eq!(
            session.effects_path(),
            PathBuf::from("/shows/2025/xlights_rgbeffects.xml")
        );
        assert_eq!(
            session.artifact_path("Arch", date),
            PathBuf::from("/tmp/out/Arch_mapping_2025_01_02.xmap")
        );
    }
}
