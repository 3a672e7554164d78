use atlas_config::SinkFormat;
use clap::ValueEnum;

/// Where tables are written.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl From<OutputFormat> for SinkFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Global flags available before or after subcommands.
///
/// `format` and `out` override `output.format` and `output.dir` from
/// configuration when given.
#[derive(Clone, Debug, Default)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub out: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}
