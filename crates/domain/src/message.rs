use crate::record::{RecordType, ResourceRecord};

/// Reserved result value signaling a negative lookup.
pub const NOT_FOUND_RESULT: &str = "Record not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMessage {
    pub transaction_id: u32,
    pub name: String,
    pub record_type: RecordType,
}

impl QueryMessage {
    pub fn new(transaction_id: u32, name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            transaction_id,
            name: name.into(),
            record_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    pub transaction_id: u32,
    pub name: String,
    pub record_type: RecordType,
    pub result: String,
    pub ttl: Option<u32>,
    pub is_static: bool,
}

impl ResponseMessage {
    /// Positive answer built from a stored record. The TTL on the wire is
    /// whatever the answering role chooses to advertise, not the record's
    /// live countdown.
    pub fn from_record(transaction_id: u32, record: &ResourceRecord, ttl: Option<u32>) -> Self {
        Self {
            transaction_id,
            name: record.name.clone(),
            record_type: record.record_type,
            result: record.result.clone(),
            ttl,
            is_static: record.is_static,
        }
    }

    /// Negative answer echoing the query's name and type.
    pub fn not_found(query: &QueryMessage) -> Self {
        Self {
            transaction_id: query.transaction_id,
            name: query.name.clone(),
            record_type: query.record_type,
            result: NOT_FOUND_RESULT.to_string(),
            ttl: None,
            is_static: false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.result == NOT_FOUND_RESULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Query(QueryMessage),
    Response(ResponseMessage),
}
