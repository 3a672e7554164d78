use clap::Subcommand;

/// Top-level command tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Subcommand)]
pub enum Commands {
    /// Refresh the object catalog (table `Objects`).
    Objects,
    /// Refresh the usage report (table `Report`).
    Report,
    /// Refresh the resource inventory (table `Resources`).
    Resources,
}

impl Commands {
    /// Name of the table the command writes.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Objects => "Objects",
            Self::Report => "Report",
            Self::Resources => "Resources",
        }
    }
}
