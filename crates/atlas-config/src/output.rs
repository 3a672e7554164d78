//! Output sink configuration.

use serde::{Deserialize, Serialize};

/// Where generated tables go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkFormat {
    /// One `<table>.csv` file per table in the output directory.
    #[default]
    Csv,
    /// Aligned text table on stdout.
    Table,
    /// JSON array on stdout.
    Json,
}

/// Default output directory.
fn default_dir() -> String {
    String::from("atlas-out")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory receiving CSV tables.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Sink used when `--format` is not given.
    #[serde(default)]
    pub format: SinkFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            format: SinkFormat::default(),
        }
    }
}
