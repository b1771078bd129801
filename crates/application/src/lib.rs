//! Tierdns Application Layer: ports and per-tier use cases.
pub mod ports;
pub mod use_cases;
