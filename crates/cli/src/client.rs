use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use tierdns_application::use_cases::ResolveHostnameUseCase;
use tierdns_domain::{Config, RecordType};
use tierdns_infrastructure::{RecordTable, UdpEndpoint, UdpUpstream};
use tierdns_jobs::TtlCountdownJob;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::table;

/// Interactive prompt loop. `hostname` or `hostname TYPE` looks a name
/// up (type defaults to A); `quit` exits.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let store = Arc::new(RecordTable::new());
    let shutdown = CancellationToken::new();

    let endpoint = Arc::new(UdpEndpoint::ephemeral(shutdown.clone()).await?);
    let recursive_addr: SocketAddr = config.server.recursive_addr().parse()?;
    let upstream = Arc::new(UdpUpstream::new(endpoint, recursive_addr));
    let use_case = ResolveHostnameUseCase::new(store.clone(), upstream);

    Arc::new(TtlCountdownJob::new(store.clone()).with_cancellation(shutdown.clone()))
        .start()
        .await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("Enter the hostname (or type 'quit' to exit)");
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, exiting");
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break; // stdin closed
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        let (hostname, type_token) = match input.split_once(char::is_whitespace) {
            Some((hostname, rest)) => (hostname, rest.trim()),
            None => (input, "A"),
        };
        let record_type = match RecordType::from_str(type_token) {
            Ok(record_type) => record_type,
            Err(e) => {
                warn!(error = %e, "Unsupported query type");
                continue;
            }
        };

        match use_case.execute(hostname, record_type).await {
            Ok(resolution) => {
                if resolution.cache_hit {
                    info!(hostname, result = %resolution.result, "Answered from cache");
                }
            }
            Err(e) => warn!(hostname, error = %e, "Lookup failed"),
        }
        table::display(store.as_ref());
    }

    shutdown.cancel();
    Ok(())
}
