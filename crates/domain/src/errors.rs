use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Malformed wire message: {0}")]
    MalformedMessage(String),

    #[error("Invalid transaction id: {0}")]
    InvalidTransactionId(String),

    #[error("Invalid TTL field: {0}")]
    InvalidTtl(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Expected a query, got a response")]
    UnexpectedResponse,

    #[error("Expected a response, got a query")]
    UnexpectedQuery,

    #[error("Endpoint shut down")]
    Shutdown,

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
