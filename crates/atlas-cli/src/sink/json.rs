use std::io::Write;

use serde_json::{Map, Value};

use super::{Row, SinkError, TabularSink, header_union};

/// Prints each table as a pretty JSON array of rows.
///
/// Every printed row carries the full header. A key the record lacks, and a
/// `null` value, print as `""`; other values keep their JSON type.
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TabularSink for JsonSink<W> {
    fn write_rows(&mut self, table: &str, rows: &[Row]) -> Result<(), SinkError> {
        if rows.is_empty() {
            tracing::warn!(table, "no rows; nothing to print");
            return Ok(());
        }

        let headers = header_union(rows);
        let filled: Vec<Row> = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|header| {
                        let value = match row.get(*header) {
                            None | Some(Value::Null) => Value::String(String::new()),
                            Some(value) => value.clone(),
                        };
                        ((*header).to_string(), value)
                    })
                    .collect::<Map<String, Value>>()
            })
            .collect();

        serde_json::to_writer_pretty(&mut self.out, &filled)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
