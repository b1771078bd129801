mod authoritative;
mod recursive;

pub use authoritative::run_authoritative;
pub use recursive::run_recursive;

use std::sync::Arc;

use tierdns_domain::config::ZoneRecord;
use tierdns_infrastructure::RecordTable;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Build a tier store pre-seeded with its static zone data.
pub(crate) fn seeded_table(zone: &[ZoneRecord]) -> anyhow::Result<Arc<RecordTable>> {
    let table = RecordTable::new();
    for entry in zone {
        table.add(entry.to_record()?);
    }
    Ok(Arc::new(table))
}

/// Cancel the token on ctrl-c so the serving loop and jobs wind down.
pub(crate) fn cancel_on_interrupt(shutdown: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, shutting down");
            shutdown.cancel();
        }
    });
}
