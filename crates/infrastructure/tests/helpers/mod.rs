//! In-process tier loops for end-to-end tests, bound to ephemeral ports.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use tierdns_application::use_cases::{
    AnswerQueryUseCase, RelayQueryUseCase, ResolveHostnameUseCase,
};
use tierdns_domain::{wire, Message, ResourceRecord};
use tierdns_infrastructure::{RecordTable, UdpEndpoint, UdpUpstream};
use tokio_util::sync::CancellationToken;

/// Spawn an authoritative tier serving `zone`; returns its address.
pub async fn spawn_authoritative(
    zone: Vec<ResourceRecord>,
    shutdown: CancellationToken,
) -> SocketAddr {
    let store = Arc::new(RecordTable::with_records(zone));
    let endpoint = Arc::new(
        UdpEndpoint::bind("127.0.0.1:0".parse().unwrap(), shutdown)
            .await
            .unwrap(),
    );
    let addr = endpoint.local_addr().unwrap();
    let use_case = AnswerQueryUseCase::new(store);

    tokio::spawn(async move {
        while let Ok((payload, source)) = endpoint.recv_from().await {
            let Ok(text) = std::str::from_utf8(&payload) else {
                continue;
            };
            let Ok(Message::Query(query)) = wire::decode(text) else {
                continue;
            };
            let response = use_case.execute(&query);
            let _ = endpoint
                .send_to(wire::encode_response(&response).as_bytes(), source)
                .await;
        }
    });

    addr
}

/// Spawn a recursive tier forwarding misses to `upstream_addr`; returns
/// its address and a handle on its store.
pub async fn spawn_recursive(
    zone: Vec<ResourceRecord>,
    upstream_addr: SocketAddr,
    shutdown: CancellationToken,
) -> (SocketAddr, Arc<RecordTable>) {
    let store = Arc::new(RecordTable::with_records(zone));
    let endpoint = Arc::new(
        UdpEndpoint::bind("127.0.0.1:0".parse().unwrap(), shutdown)
            .await
            .unwrap(),
    );
    let addr = endpoint.local_addr().unwrap();
    let upstream = Arc::new(UdpUpstream::new(endpoint.clone(), upstream_addr));
    let use_case = RelayQueryUseCase::new(store.clone(), upstream);

    tokio::spawn(async move {
        while let Ok((payload, source)) = endpoint.recv_from().await {
            if let Ok(reply) = use_case.execute(&payload).await {
                let _ = endpoint.send_to(&reply, source).await;
            }
        }
    });

    (addr, store)
}

/// Build a client use case talking to `recursive_addr` from an ephemeral
/// endpoint.
pub async fn client(
    recursive_addr: SocketAddr,
    shutdown: CancellationToken,
) -> (ResolveHostnameUseCase, Arc<RecordTable>) {
    let store = Arc::new(RecordTable::new());
    let endpoint = Arc::new(UdpEndpoint::ephemeral(shutdown).await.unwrap());
    let upstream = Arc::new(UdpUpstream::new(endpoint, recursive_addr));
    let use_case = ResolveHostnameUseCase::new(store.clone(), upstream);
    (use_case, store)
}
