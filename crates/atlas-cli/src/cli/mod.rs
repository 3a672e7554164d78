use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `atlas` binary.
#[derive(Debug, Parser)]
#[command(
    name = "atlas",
    version,
    about = "Atlas - Jamf Pro object catalog and usage report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output sink: csv, table, json (defaults to `output.format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Directory for CSV tables (defaults to `output.dir`)
    #[arg(short, long, global = true)]
    pub out: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            out: self.out.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use atlas_config::SinkFormat;
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["atlas", "--format", "table", "--verbose", "objects"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert_eq!(cli.command, Commands::Objects);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["atlas", "report", "--out", "/tmp/atlas", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.out.as_deref(), Some("/tmp/atlas"));
        assert!(cli.quiet);
        assert_eq!(cli.format, None);
        assert_eq!(cli.command, Commands::Report);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["atlas", "--format", "xml", "objects"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["atlas"]).is_err());
    }

    #[test]
    fn output_format_maps_to_sink_format() {
        for (value, expected) in [
            ("csv", SinkFormat::Csv),
            ("table", SinkFormat::Table),
            ("json", SinkFormat::Json),
        ] {
            let cli = Cli::try_parse_from(["atlas", "--format", value, "resources"])
                .expect("cli should parse");
            let format = cli.format.map(SinkFormat::from);
            assert_eq!(format, Some(expected));
        }
    }

    #[test]
    fn commands_name_their_tables() {
        assert_eq!(Commands::Objects.table(), "Objects");
        assert_eq!(Commands::Report.table(), "Report");
        assert_eq!(Commands::Resources.table(), "Resources");
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["atlas", "-o", "out", "-f", "json", "objects"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.out.as_deref(), Some("out"));
        assert_eq!(flags.format, Some(OutputFormat::Json));
    }
}
