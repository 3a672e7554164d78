use atlas_client::{JamfClient, Transport};

use crate::cli::Commands;
use crate::commands;
use crate::sink::TabularSink;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch<T: Transport>(
    command: &Commands,
    client: &JamfClient<T>,
    sink: &mut dyn TabularSink,
) -> anyhow::Result<()> {
    let table = command.table();
    match command {
        Commands::Objects => commands::objects::handle(client, sink, table).await,
        Commands::Report => commands::report::handle(client, sink, table).await,
        Commands::Resources => commands::resources::handle(client, sink, table).await,
    }
}
