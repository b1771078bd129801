use serde::{Deserialize, Serialize};

/// Fixed endpoints for the serving tiers. The client binds ephemerally
/// and only targets the recursive resolver.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_recursive_port")]
    pub recursive_port: u16,

    #[serde(default = "default_authoritative_port")]
    pub authoritative_port: u16,
}

impl ServerConfig {
    pub fn recursive_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.recursive_port)
    }

    pub fn authoritative_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.authoritative_port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            recursive_port: default_recursive_port(),
            authoritative_port: default_authoritative_port(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_recursive_port() -> u16 {
    21000
}

fn default_authoritative_port() -> u16 {
    22000
}
