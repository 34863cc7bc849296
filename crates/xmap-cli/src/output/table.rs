//! Plain aligned-column table rendering for terminal output.

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, &width)| format!("{header:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();

    let divider = "-".repeat(header_line.len());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let value = row.get(index).map_or("-", String::as_str);
                format!("{value:<width$}")
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = vec![header_line, divider];
    lines.extend(row_lines);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn columns_align_to_the_widest_cell() {
        let rows = vec![
            vec!["Tree-1".to_string(), "left tree".to_string()],
            vec!["Arch".to_string(), "".to_string()],
        ];
        let rendered = render(&["MODEL", "DESCRIPTION"], &rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "MODEL   DESCRIPTION");
        assert_eq!(lines[2], "Tree-1  left tree");
        assert_eq!(lines[3], "Arch");
    }

    #[test]
    fn missing_cells_render_as_dashes() {
        let rows = vec![vec!["only".to_string()]];
        let rendered = render(&["A", "B"], &rows);
        let last = rendered.lines().last().expect("row line");
        assert_eq!(last, "only  -");
    }
}
