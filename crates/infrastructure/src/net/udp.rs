//! UDP endpoint shared by every tier.
//!
//! Datagrams are fire-and-forget. A receive blocks until data arrives or
//! the shutdown token is cancelled; there is no per-call timeout. Reply
//! pairing is positional: a role sends and then takes the next datagram
//! on the same socket as the answer, so it keeps at most one downstream
//! query in flight.

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use tierdns_application::ports::UpstreamExchange;
use tierdns_domain::DomainError;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Largest datagram any tier sends or accepts.
const MAX_DATAGRAM_SIZE: usize = 4096;

pub struct UdpEndpoint {
    socket: UdpSocket,
    shutdown: CancellationToken,
}

impl UdpEndpoint {
    /// Claim a fixed local endpoint (serving tiers).
    pub async fn bind(addr: SocketAddr, shutdown: CancellationToken) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| DomainError::IoError(format!("failed to bind {}: {}", addr, e)))?;
        debug!(local = %addr, "UDP endpoint bound");
        Ok(Self { socket, shutdown })
    }

    /// Ephemeral endpoint (client tier); the OS picks the port.
    pub async fn ephemeral(shutdown: CancellationToken) -> Result<Self, DomainError> {
        Self::bind("127.0.0.1:0".parse().unwrap(), shutdown).await
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    pub async fn send_to(&self, payload: &[u8], dest: SocketAddr) -> Result<(), DomainError> {
        self.socket
            .send_to(payload, dest)
            .await
            .map_err(|e| DomainError::IoError(format!("failed to send to {}: {}", dest, e)))?;
        Ok(())
    }

    /// Block until a datagram arrives or the endpoint is shut down.
    pub async fn recv_from(&self) -> Result<(Vec<u8>, SocketAddr), DomainError> {
        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        tokio::select! {
            _ = self.shutdown.cancelled() => Err(DomainError::Shutdown),
            received = self.socket.recv_from(&mut buf) => {
                let (len, source) = received
                    .map_err(|e| DomainError::IoError(format!("receive failed: {}", e)))?;
                buf.truncate(len);
                Ok((buf, source))
            }
        }
    }

}

/// Forward-and-wait exchange against a fixed next-tier address, on the
/// same socket the owning role serves from.
pub struct UdpUpstream {
    endpoint: Arc<UdpEndpoint>,
    upstream_addr: SocketAddr,
}

impl UdpUpstream {
    pub fn new(endpoint: Arc<UdpEndpoint>, upstream_addr: SocketAddr) -> Self {
        Self {
            endpoint,
            upstream_addr,
        }
    }
}

#[async_trait]
impl UpstreamExchange for UdpUpstream {
    async fn exchange(&self, message: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.endpoint.send_to(message, self.upstream_addr).await?;
        let (payload, source) = self.endpoint.recv_from().await?;
        debug!(
            upstream = %self.upstream_addr,
            from = %source,
            bytes = payload.len(),
            "Upstream reply received"
        );
        Ok(payload)
    }
}
