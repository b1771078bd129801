//! Tierdns Domain Layer
pub mod config;
pub mod errors;
pub mod message;
pub mod record;
pub mod wire;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use message::{Message, QueryMessage, ResponseMessage, NOT_FOUND_RESULT};
pub use record::{RecordType, ResourceRecord};
