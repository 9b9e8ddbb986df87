use chromaview::Status;
use serde::Serialize;

/// Successful store heartbeat
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    pub status: Status,
    pub heartbeat: u64,
}

/// Successful connect, with the collections found on the server
#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub status: Status,
    pub message: String,
    pub collections: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
