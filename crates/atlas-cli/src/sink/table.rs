use std::io::{self, Write};

use super::{Row, SinkError, TabularSink, cell, header_union};

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

impl TableOptions {
    /// Width limit from `COLUMNS`, ignored below 40.
    #[must_use]
    pub fn from_env() -> Self {
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        Self { max_width }
    }
}

/// Prints each table as an aligned text table.
pub struct TableSink<W> {
    out: W,
    options: TableOptions,
}

impl TableSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), TableOptions::from_env())
    }
}

impl<W: Write> TableSink<W> {
    pub const fn new(out: W, options: TableOptions) -> Self {
        Self { out, options }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TabularSink for TableSink<W> {
    fn write_rows(&mut self, table: &str, rows: &[Row]) -> Result<(), SinkError> {
        if rows.is_empty() {
            tracing::warn!(table, "no rows; nothing to print");
            return Ok(());
        }

        let headers = header_union(rows);
        let cells = rows
            .iter()
            .map(|row| headers.iter().map(|header| cell(row, header)).collect())
            .collect::<Vec<Vec<String>>>();

        writeln!(self.out, "{table} ({} rows)", rows.len())?;
        writeln!(self.out, "{}", render_table(&headers, &cells, self.options))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                format_cell(&truncated, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider.trim_end().to_string());
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns until the table fits `max_width`. Columns never
/// shrink below their header.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].chars().count();
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn unbounded() -> TableOptions {
        TableOptions { max_width: None }
    }

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["id", "type", "name"];
        let rows = vec![
            vec!["1".to_string(), "category".to_string(), "Browsers".to_string()],
            vec!["120".to_string(), "policy".to_string(), "Install Firefox".to_string()],
        ];

        let table = render_table(&headers, &rows, unbounded());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "id   type      name");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "  1  category  Browsers");
        assert_eq!(lines[3], "120  policy    Install Firefox");
    }

    #[test]
    fn wide_columns_are_truncated_to_fit() {
        let headers = ["id", "name"];
        let rows = vec![vec!["1".to_string(), "x".repeat(80)]];

        let table = render_table(&headers, &rows, TableOptions { max_width: Some(40) });

        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn sink_prints_header_union_in_first_seen_order() {
        let rows: Vec<Row> = [
            json!({"type": "script", "id": "5"}),
            json!({"type": "policy", "enabled": true, "id": "10"}),
        ]
        .iter()
        .map(|value| value.as_object().cloned().unwrap())
        .collect();

        let mut sink = TableSink::new(Vec::new(), unbounded());
        sink.write_rows("Objects", &rows).unwrap();
        let printed = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(lines[0], "Objects (2 rows)");
        assert_eq!(lines[1], "type    id  enabled");
        assert_eq!(lines[3], "script   5");
        assert_eq!(lines[4], "policy  10  true");
    }

    #[test]
    fn sink_skips_empty_tables() {
        let mut sink = TableSink::new(Vec::new(), unbounded());
        sink.write_rows("Report", &[]).unwrap();
        assert!(sink.into_inner().is_empty());
    }
}
