use std::sync::Arc;
use std::time::Duration;

use tierdns_application::ports::TtlMaintenancePort;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_TICK_INTERVAL_SECS: u64 = 1;

/// Periodic TTL countdown over one tier's record store.
///
/// Each tick runs a full decrement-and-sweep cycle through the
/// maintenance port. The job has no explicit stop of its own; it ends
/// with the process or when the cancellation token fires.
pub struct TtlCountdownJob {
    maintenance: Arc<dyn TtlMaintenancePort>,
    tick_interval_secs: u64,
    shutdown: CancellationToken,
}

impl TtlCountdownJob {
    pub fn new(maintenance: Arc<dyn TtlMaintenancePort>) -> Self {
        Self {
            maintenance,
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.tick_interval_secs = secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.tick_interval_secs,
            "Starting TTL countdown job"
        );

        let job = Arc::clone(&self);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(job.tick_interval_secs));
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("TtlCountdownJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match job.maintenance.run_ttl_cycle().await {
                            Ok(outcome) => {
                                if outcome.expired_removed > 0 {
                                    info!(
                                        expired = outcome.expired_removed,
                                        store_size = outcome.store_size,
                                        "Expired records swept"
                                    );
                                } else if outcome.decremented > 0 {
                                    debug!(
                                        decremented = outcome.decremented,
                                        "TTL countdown tick"
                                    );
                                }
                            }
                            Err(e) => {
                                error!(error = %e, "TTL countdown cycle failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
