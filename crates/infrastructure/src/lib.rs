//! Tierdns Infrastructure: the record table and the UDP transport.
pub mod net;
pub mod store;

pub use net::{UdpEndpoint, UdpUpstream};
pub use store::RecordTable;
