use std::net::SocketAddr;
use std::sync::Arc;

use tierdns_application::use_cases::RelayQueryUseCase;
use tierdns_domain::{Config, DomainError};
use tierdns_infrastructure::{UdpEndpoint, UdpUpstream};
use tierdns_jobs::TtlCountdownJob;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::table;

pub async fn run_recursive(config: &Config) -> anyhow::Result<()> {
    let store = super::seeded_table(&config.zone.recursive)?;
    let shutdown = CancellationToken::new();
    super::cancel_on_interrupt(shutdown.clone());

    let addr: SocketAddr = config.server.recursive_addr().parse()?;
    let authoritative_addr: SocketAddr = config.server.authoritative_addr().parse()?;
    let endpoint = Arc::new(UdpEndpoint::bind(addr, shutdown.clone()).await?);
    info!(
        addr = %addr,
        upstream = %authoritative_addr,
        records = store.len(),
        "Recursive resolver listening"
    );

    Arc::new(TtlCountdownJob::new(store.clone()).with_cancellation(shutdown.clone()))
        .start()
        .await;

    let upstream = Arc::new(UdpUpstream::new(endpoint.clone(), authoritative_addr));
    let use_case = RelayQueryUseCase::new(store.clone(), upstream);

    // Serial loop: while a forwarded query waits on the authoritative
    // tier, no other incoming query is serviced.
    loop {
        let (payload, source) = match endpoint.recv_from().await {
            Ok(received) => received,
            Err(DomainError::Shutdown) => break,
            Err(e) => {
                warn!(error = %e, "Receive failed");
                continue;
            }
        };

        match use_case.execute(&payload).await {
            Ok(reply) => {
                if let Err(e) = endpoint.send_to(&reply, source).await {
                    warn!(source = %source, error = %e, "Failed to relay reply");
                }
            }
            Err(e) => warn!(source = %source, error = %e, "Failed to handle query"),
        }
        table::display(store.as_ref());
    }

    info!("Recursive resolver stopped");
    Ok(())
}
