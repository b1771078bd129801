pub mod ttl_countdown;

pub use ttl_countdown::TtlCountdownJob;
