use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{Row, SinkError, TabularSink, cell, header_union};

/// Writes each table to `<dir>/<table>.csv`.
///
/// The file is written to a temporary file in the same directory and renamed
/// over the previous table, so readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    #[must_use]
    pub fn path_for(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{table}.csv"))
    }
}

impl TabularSink for CsvSink {
    fn write_rows(&mut self, table: &str, rows: &[Row]) -> Result<(), SinkError> {
        if rows.is_empty() {
            tracing::warn!(table, "no rows; leaving table untouched");
            return Ok(());
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(table);
        write_atomic(&self.dir, &path, rows)?;

        tracing::info!(table, rows = rows.len(), path = %path.display(), "wrote table");
        Ok(())
    }
}

fn write_atomic(dir: &Path, path: &Path, rows: &[Row]) -> Result<(), SinkError> {
    let previous = fs::metadata(path).ok().map(|meta| meta.permissions());
    let mut file = temp_file_in(dir)?;
    {
        let mut writer = ::csv::Writer::from_writer(file.as_file_mut());
        let headers = header_union(rows);
        writer.write_record(&headers)?;
        for row in rows {
            writer.write_record(headers.iter().map(|header| cell(row, header)))?;
        }
        writer.flush()?;
    }
    if let Some(permissions) = previous {
        file.as_file().set_permissions(permissions)?;
    }
    file.persist(path).map_err(|error| SinkError::Io(error.error))?;
    Ok(())
}

/// Temp file whose mode matches a freshly created file (umask applies).
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .prefix(".atlas-")
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
