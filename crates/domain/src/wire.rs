//! Text wire format shared by all tiers.
//!
//! Queries are `transaction_id,name,type`; responses are
//! `transaction_id,name,type,result,ttl,static` where `ttl` is an integer
//! or the literal `None` and `static` is `0`/`1`. Field values must not
//! contain the delimiter; the format has no escaping.

use crate::errors::DomainError;
use crate::message::{Message, QueryMessage, ResponseMessage};

pub const DELIMITER: char = ',';

/// TTL advertised on every positive response. Downstream tiers cache the
/// advertised value, not the answering store's live countdown.
pub const ADVERTISED_TTL: u32 = 60;

const QUERY_FIELDS: usize = 3;
const RESPONSE_FIELDS: usize = 6;

const TTL_ABSENT: &str = "None";

pub fn encode_query(query: &QueryMessage) -> String {
    format!(
        "{},{},{}",
        query.transaction_id, query.name, query.record_type
    )
}

pub fn encode_response(response: &ResponseMessage) -> String {
    let ttl = match response.ttl {
        Some(secs) => secs.to_string(),
        None => TTL_ABSENT.to_string(),
    };
    format!(
        "{},{},{},{},{},{}",
        response.transaction_id,
        response.name,
        response.record_type,
        response.result,
        ttl,
        u8::from(response.is_static),
    )
}

/// Positional decode. Anything that is not exactly a query or a response
/// is a hard error; nothing is silently defaulted.
pub fn decode(input: &str) -> Result<Message, DomainError> {
    let fields: Vec<&str> = input.split(DELIMITER).collect();
    match fields.len() {
        QUERY_FIELDS => Ok(Message::Query(QueryMessage {
            transaction_id: parse_transaction_id(fields[0])?,
            name: fields[1].to_string(),
            record_type: fields[2].parse()?,
        })),
        RESPONSE_FIELDS => Ok(Message::Response(ResponseMessage {
            transaction_id: parse_transaction_id(fields[0])?,
            name: fields[1].to_string(),
            record_type: fields[2].parse()?,
            result: fields[3].to_string(),
            ttl: parse_ttl(fields[4])?,
            is_static: parse_static_flag(fields[5])?,
        })),
        count => Err(DomainError::MalformedMessage(format!(
            "expected {} or {} fields, got {}",
            QUERY_FIELDS, RESPONSE_FIELDS, count
        ))),
    }
}

fn parse_transaction_id(field: &str) -> Result<u32, DomainError> {
    field
        .parse()
        .map_err(|_| DomainError::InvalidTransactionId(field.to_string()))
}

fn parse_ttl(field: &str) -> Result<Option<u32>, DomainError> {
    if field == TTL_ABSENT {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|_| DomainError::InvalidTtl(field.to_string()))
}

fn parse_static_flag(field: &str) -> Result<bool, DomainError> {
    match field {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(DomainError::MalformedMessage(format!(
            "invalid static flag: {}",
            other
        ))),
    }
}
