mod udp;

pub use udp::{UdpEndpoint, UdpUpstream};
