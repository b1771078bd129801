use std::net::SocketAddr;
use std::sync::Arc;

use tierdns_application::use_cases::AnswerQueryUseCase;
use tierdns_domain::{wire, Config, DomainError, Message};
use tierdns_infrastructure::UdpEndpoint;
use tierdns_jobs::TtlCountdownJob;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::table;

pub async fn run_authoritative(config: &Config) -> anyhow::Result<()> {
    let store = super::seeded_table(&config.zone.authoritative)?;
    let shutdown = CancellationToken::new();
    super::cancel_on_interrupt(shutdown.clone());

    let addr: SocketAddr = config.server.authoritative_addr().parse()?;
    let endpoint = Arc::new(UdpEndpoint::bind(addr, shutdown.clone()).await?);
    info!(addr = %addr, records = store.len(), "Authoritative server listening");

    Arc::new(TtlCountdownJob::new(store.clone()).with_cancellation(shutdown.clone()))
        .start()
        .await;

    let use_case = AnswerQueryUseCase::new(store.clone());

    // Serial loop: one query handled to completion per iteration.
    loop {
        let (payload, source) = match endpoint.recv_from().await {
            Ok(received) => received,
            Err(DomainError::Shutdown) => break,
            Err(e) => {
                warn!(error = %e, "Receive failed");
                continue;
            }
        };

        if let Err(e) = answer(&endpoint, &use_case, &payload, source).await {
            warn!(source = %source, error = %e, "Failed to handle query");
        }
        table::display(store.as_ref());
    }

    info!("Authoritative server stopped");
    Ok(())
}

async fn answer(
    endpoint: &UdpEndpoint,
    use_case: &AnswerQueryUseCase,
    payload: &[u8],
    source: SocketAddr,
) -> Result<(), DomainError> {
    let text = std::str::from_utf8(payload)
        .map_err(|_| DomainError::MalformedMessage("payload is not valid UTF-8".to_string()))?;
    let query = match wire::decode(text)? {
        Message::Query(query) => query,
        Message::Response(_) => return Err(DomainError::UnexpectedResponse),
    };
    let response = use_case.execute(&query);
    endpoint
        .send_to(wire::encode_response(&response).as_bytes(), source)
        .await
}
