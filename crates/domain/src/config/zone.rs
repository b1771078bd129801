use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::record::{RecordType, ResourceRecord};

/// One static seed entry, provisioned into a tier's store at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneRecord {
    pub name: String,

    pub record_type: String,

    pub result: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl ZoneRecord {
    pub fn to_record(&self) -> Result<ResourceRecord, DomainError> {
        let record_type = RecordType::from_str(&self.record_type)?;
        Ok(ResourceRecord::new(
            self.name.clone(),
            record_type,
            self.result.clone(),
            self.ttl,
            true,
        ))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    #[serde(default = "default_authoritative_zone")]
    pub authoritative: Vec<ZoneRecord>,

    #[serde(default = "default_recursive_zone")]
    pub recursive: Vec<ZoneRecord>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            authoritative: default_authoritative_zone(),
            recursive: default_recursive_zone(),
        }
    }
}

fn entry(name: &str, record_type: &str, result: &str) -> ZoneRecord {
    ZoneRecord {
        name: name.to_string(),
        record_type: record_type.to_string(),
        result: result.to_string(),
        ttl: None,
    }
}

fn default_authoritative_zone() -> Vec<ZoneRecord> {
    vec![
        entry("shop.amazone.com", "A", "3.33.147.88"),
        entry("cloud.amazone.com", "A", "15.197.140.28"),
    ]
}

fn default_recursive_zone() -> Vec<ZoneRecord> {
    vec![
        entry("www.csusm.edu", "A", "144.37.5.45"),
        entry("my.csusm.edu", "A", "144.37.5.150"),
        entry("amazone.com", "NS", "dns.amazone.com"),
        entry("dns.amazone.com", "A", "127.0.0.1"),
    ]
}
