use async_trait::async_trait;
use tierdns_domain::DomainError;

/// Outcome of one TTL countdown pass.
#[derive(Debug, Default, Clone)]
pub struct TtlTickOutcome {
    pub decremented: usize,
    pub expired_removed: usize,
    pub store_size: usize,
}

/// Port for the periodic TTL countdown over a record store.
#[async_trait]
pub trait TtlMaintenancePort: Send + Sync {
    /// Decrement live TTLs and sweep expired records as one atomic pass.
    async fn run_ttl_cycle(&self) -> Result<TtlTickOutcome, DomainError>;
}
