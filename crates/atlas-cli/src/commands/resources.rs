use anyhow::Context;
use atlas_client::{JamfClient, Transport};
use atlas_report::ObjectCatalog;

use crate::sink::{TabularSink, to_rows};

/// Handle `atlas resources`: the catalog limited to deployable objects.
pub async fn handle<T: Transport>(
    client: &JamfClient<T>,
    sink: &mut dyn TabularSink,
    table: &str,
) -> anyhow::Result<()> {
    let objects = ObjectCatalog::resources(client)
        .build()
        .await
        .context("failed to build resource inventory")?;
    tracing::info!(count = objects.len(), "resource inventory built");

    let rows = to_rows(&objects)?;
    sink.write_rows(table, &rows)
        .with_context(|| format!("failed to write table {table}"))
}
