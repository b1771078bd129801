mod record_store;
mod ttl_maintenance;
mod upstream;

pub use record_store::RecordStore;
pub use ttl_maintenance::{TtlMaintenancePort, TtlTickOutcome};
pub use upstream::UpstreamExchange;
