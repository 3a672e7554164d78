//! Tabular output.
//!
//! Every sink receives a table name and a list of uniform records. The header
//! is the union of all record keys in first-seen order; a key a record lacks,
//! and a `null` value, both render as an empty cell. An empty record list is
//! not written at all, so a previous table of the same name survives.

use std::path::PathBuf;

use atlas_config::{OutputConfig, SinkFormat};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::cli::GlobalFlags;

pub mod csv;
pub mod json;
pub mod table;

pub use self::csv::CsvSink;
pub use self::json::JsonSink;
pub use self::table::TableSink;

pub type Row = Map<String, Value>;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record did not serialize to a JSON object.
    #[error("record {index} is not a key/value record")]
    NotARecord { index: usize },
}

/// Destination for generated tables.
pub trait TabularSink {
    /// Replace `table` with `rows`. Does nothing when `rows` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the table cannot be written.
    fn write_rows(&mut self, table: &str, rows: &[Row]) -> Result<(), SinkError>;
}

/// Serialize records into rows, keeping each record's key order.
///
/// # Errors
///
/// Returns [`SinkError::NotARecord`] for a record that is not a map.
pub fn to_rows<T: Serialize>(records: &[T]) -> Result<Vec<Row>, SinkError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| match serde_json::to_value(record)? {
            Value::Object(map) => Ok(map),
            _ => Err(SinkError::NotARecord { index }),
        })
        .collect()
}

/// Union of all row keys, in the order they are first seen.
#[must_use]
pub fn header_union(rows: &[Row]) -> Vec<&str> {
    let mut headers = Vec::<&str>::new();
    for key in rows.iter().flat_map(Map::keys) {
        if !headers.contains(&key.as_str()) {
            headers.push(key.as_str());
        }
    }
    headers
}

/// Cell text for `header` in `row`.
#[must_use]
pub fn cell(row: &Row, header: &str) -> String {
    match row.get(header) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Build the sink selected by flags, falling back to configuration.
pub fn open(flags: &GlobalFlags, output: &OutputConfig) -> Box<dyn TabularSink> {
    let format = flags.format.map_or(output.format, SinkFormat::from);
    match format {
        SinkFormat::Csv => {
            let dir = flags.out.as_deref().unwrap_or(&output.dir);
            Box::new(CsvSink::new(PathBuf::from(dir)))
        }
        SinkFormat::Table => Box::new(TableSink::stdout()),
        SinkFormat::Json => Box::new(JsonSink::new(std::io::stdout())),
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn header_is_first_seen_union() {
        let rows = [
            row(json!({"a": 1, "b": 2})),
            row(json!({"c": 3, "a": 4})),
            row(json!({"d": null, "b": 5})),
        ];
        assert_eq!(header_union(&rows), ["a", "b", "c", "d"]);
    }

    #[test]
    fn header_of_no_rows_is_empty() {
        assert!(header_union(&[]).is_empty());
    }

    #[test]
    fn absent_and_null_cells_are_empty() {
        let record = row(json!({"a": null, "b": false, "c": 7, "d": "x"}));
        assert_eq!(cell(&record, "a"), "");
        assert_eq!(cell(&record, "missing"), "");
        assert_eq!(cell(&record, "b"), "false");
        assert_eq!(cell(&record, "c"), "7");
        assert_eq!(cell(&record, "d"), "x");
    }

    #[test]
    fn to_rows_keeps_field_order() {
        #[derive(Serialize)]
        struct Record {
            zeta: u8,
            alpha: u8,
        }

        let rows = to_rows(&[Record { zeta: 1, alpha: 2 }]).unwrap();
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn to_rows_rejects_scalars() {
        let err = to_rows(&[json!({"a": 1}), json!(3)]).unwrap_err();
        assert!(matches!(err, SinkError::NotARecord { index: 1 }));
    }
}
