//! `.xmap` mapping artifact serialization and writing.
//!
//! The artifact layout is fixed and consumed byte-for-byte by the host
//! authoring tool: a `false` header line, the decimal target count, one
//! line per target name, then for every target a primary row followed by
//! one row per submodel. Field separators are literal tabs.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::errors::ArtifactError;

/// Fixed color tag emitted on every mapping row.
const COLOR_TAG: &str = "white";

/// Artifact file name for a primary model on a given date:
/// `<primary>_mapping_<YYYY_MM_DD>.xmap`.
#[must_use]
pub fn file_name(primary: &str, date: NaiveDate) -> String {
    format!("{primary}_mapping_{}.xmap", date.format("%Y_%m_%d"))
}

/// Render the complete artifact text.
///
/// Row order: targets iterate in the given order; within each target the
/// submodels iterate in catalog (document) order.
#[must_use]
pub fn render(primary: &str, submodels: &[String], targets: &[String]) -> String {
    let mut out = String::new();
    out.push_str("false\n");
    out.push_str(&targets.len().to_string());
    out.push('\n');
    for target in targets {
        out.push_str(target);
        out.push('\n');
    }
    for target in targets {
        out.push_str(&format!("{target}\t\t\t{primary}\t{COLOR_TAG}\n"));
        for submodel in submodels {
            out.push_str(&format!(
                "{target}\t{submodel}\t\t{primary}/{submodel}\t{COLOR_TAG}\n"
            ));
        }
    }
    out
}

/// Write the mapping artifact to `path` in a single attempt.
///
/// The file handle is scoped to this call and closed on every exit path.
/// If writing fails partway, the partial file is removed before the
/// error is returned, so a failure never leaves an artifact behind.
///
/// # Errors
///
/// Returns [`ArtifactError::Io`] when the destination cannot be created
/// or written.
pub fn write(
    path: &Path,
    primary: &str,
    submodels: &[String],
    targets: &[String],
) -> Result<(), ArtifactError> {
    let text = render(primary, submodels, targets);
    if let Err(source) = write_text(path, &text) {
        let _ = fs::remove_file(path);
        return Err(ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    tracing::info!(path = %path.display(), targets = targets.len(), "mapping file created");
    Ok(())
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn file_name_embeds_primary_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 16).expect("valid date");
        assert_eq!(file_name("Tree-1", date), "Tree-1_mapping_2025_06_16.xmap");
    }

    #[test]
    fn renders_the_exact_layout() {
        let text = render("P", &strings(&["s1", "s2"]), &strings(&["T1", "T2"]));
        assert_eq!(
            text,
            "false\n\
             2\n\
             T1\n\
             T2\n\
             T1\t\t\tP\twhite\n\
             T1\ts1\t\tP/s1\twhite\n\
             T1\ts2\t\tP/s2\twhite\n\
             T2\t\t\tP\twhite\n\
             T2\ts1\t\tP/s1\twhite\n\
             T2\ts2\t\tP/s2\twhite\n"
        );
    }

    #[test]
    fn second_line_is_the_decimal_target_count() {
        let text = render("P", &[], &strings(&["T1", "T2", "T3"]));
        let second = text.lines().nth(1).expect("count line");
        assert_eq!(second, "3");
    }

    #[test]
    fn data_rows_carry_the_expected_tab_counts() {
        let text = render("P", &strings(&["s1", "s2"]), &strings(&["T1", "T2"]));
        let rows: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(rows.len(), 8);

        // Target-name block has no tabs at all.
        for row in &rows[..2] {
            assert_eq!(row.matches('\t').count(), 0, "row {row:?}");
        }
        // Primary and submodel rows both carry four tab separators.
        for row in &rows[2..] {
            assert_eq!(row.matches('\t').count(), 4, "row {row:?}");
        }
    }

    #[test]
    fn model_without_submodels_maps_only_the_primary_row() {
        let text = render("Matrix", &[], &strings(&["Matrix2"]));
        assert_eq!(text, "false\n1\nMatrix2\nMatrix2\t\t\tMatrix\twhite\n");
    }

    #[test]
    fn writes_artifact_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("P_mapping_2025_06_16.xmap");

        write(&path, "P", &strings(&["s1"]), &strings(&["T1"])).expect("write should succeed");

        let written = fs::read_to_string(&path).expect("artifact should exist");
        assert_eq!(written, render("P", &strings(&["s1"]), &strings(&["T1"])));
    }

    #[test]
    fn rerun_overwrites_the_same_day_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("P_mapping_2025_06_16.xmap");

        write(&path, "P", &strings(&["s1"]), &strings(&["T1"])).expect("first write");
        write(&path, "P", &[], &strings(&["T2"])).expect("second write");

        let written = fs::read_to_string(&path).expect("artifact should exist");
        assert_eq!(written, "false\n1\nT2\nT2\t\t\tP\twhite\n");
    }

    #[test]
    fn missing_parent_directory_is_a_write_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent").join("P_mapping_2025_06_16.xmap");

        let result = write(&path, "P", &[], &strings(&["T1"]));
        assert!(matches!(result, Err(ArtifactError::Io { .. })));
        assert!(!path.exists());
    }
}
