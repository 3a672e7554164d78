use anyhow::Context;
use atlas_client::{JamfClient, Transport};
use atlas_report::UsageReport;

use crate::sink::{TabularSink, to_rows};

/// Handle `atlas report`.
pub async fn handle<T: Transport>(
    client: &JamfClient<T>,
    sink: &mut dyn TabularSink,
    table: &str,
) -> anyhow::Result<()> {
    let edges = UsageReport::new(client)
        .build()
        .await
        .context("failed to build usage report")?;
    tracing::info!(count = edges.len(), "usage report built");

    let rows = to_rows(&edges)?;
    sink.write_rows(table, &rows)
        .with_context(|| format!("failed to write table {table}"))
}
