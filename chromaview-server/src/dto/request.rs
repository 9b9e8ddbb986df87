use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Request to connect to a ChromaDB server
#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    pub ip: Option<String>,
    /// Validated by the connection state, so any JSON value is accepted here
    #[serde(default)]
    pub port: JsonValue,
}

impl ConnectRequest {
    /// Host to connect to; blank or missing means localhost.
    pub fn host(&self) -> &str {
        match self.ip.as_deref().map(str::trim) {
            Some(ip) if !ip.is_empty() => ip,
            _ => "localhost",
        }
    }
}

/// Pagination query for collection contents
#[derive(Debug, Default, Deserialize)]
pub struct CollectionQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}
