use async_trait::async_trait;
use tierdns_domain::DomainError;

/// Port for the forward-and-wait exchange with the next tier.
///
/// Pairing is positional: the next datagram received on the socket is
/// taken as the reply, so a role keeps at most one downstream query in
/// flight at a time.
#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    async fn exchange(&self, message: &[u8]) -> Result<Vec<u8>, DomainError>;
}
