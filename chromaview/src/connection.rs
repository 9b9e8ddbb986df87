//! The single active store handle shared by every request.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tokio::sync::{Mutex, RwLock};

use crate::error::{BridgeError, Result};
use crate::store::{StoreClient, StoreConnector};

/// Outcome of a successful [`ConnectionState::connect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connected {
    pub endpoint: String,
    pub collections: Vec<String>,
}

/// Holds the current store handle.
///
/// Readers take a cheap clone of the handle and release the lock before doing
/// any I/O. `connect` calls are serialized against each other; the handle is
/// swapped in a single write so readers observe either the old or the new one.
pub struct ConnectionState {
    connector: Arc<dyn StoreConnector>,
    handle: RwLock<Option<Arc<dyn StoreClient>>>,
    connect_gate: Mutex<()>,
}

impl ConnectionState {
    pub fn new(connector: Arc<dyn StoreConnector>) -> Self {
        Self {
            connector,
            handle: RwLock::new(None),
            connect_gate: Mutex::new(()),
        }
    }

    /// Open a session with the store at `host:port` and make it the active one.
    ///
    /// The port is validated before anything touches the network. The stored
    /// handle is only replaced once the new session has answered a heartbeat;
    /// on any earlier failure the previous handle stays in place. A failure to
    /// list collections after that point is returned, but the new handle
    /// remains active.
    pub async fn connect(&self, host: &str, port: &JsonValue) -> Result<Connected> {
        let port = parse_port(port)?;
        let _gate = self.connect_gate.lock().await;

        let client = self.connector.connect(host, port)?;
        let beat = client.heartbeat().await?;
        tracing::debug!(endpoint = client.endpoint(), heartbeat = beat, "Store answered heartbeat");

        *self.handle.write().await = Some(Arc::clone(&client));
        tracing::info!(endpoint = client.endpoint(), "Connected to store");

        let collections = client.list_collections().await?;
        Ok(Connected {
            endpoint: client.endpoint().to_string(),
            collections,
        })
    }

    /// Ping the active session and return its heartbeat token.
    pub async fn heartbeat(&self) -> Result<u64> {
        let client = self.current().await?;
        client.heartbeat().await
    }

    /// The active handle, or [`BridgeError::Disconnected`] when there is none.
    pub async fn current(&self) -> Result<Arc<dyn StoreClient>> {
        self.handle
            .read()
            .await
            .as_ref()
            .map(Arc::clone)
            .ok_or(BridgeError::Disconnected)
    }

    pub async fn is_connected(&self) -> bool {
        self.handle.read().await.is_some()
    }
}

impl std::fmt::Debug for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionState")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// Accept a port given as a JSON integer or as a string holding one.
pub fn parse_port(value: &JsonValue) -> Result<u16> {
    let port = match value {
        JsonValue::Number(n) => n
            .as_i64()
            .ok_or_else(|| BridgeError::invalid_parameter("port", format!("not an integer: {}", n)))?,
        JsonValue::String(s) => s.trim().parse::<i64>().map_err(|_| {
            BridgeError::invalid_parameter("port", format!("invalid literal for integer: '{}'", s))
        })?,
        JsonValue::Null => return Err(BridgeError::invalid_parameter("port", "port is required")),
        other => {
            return Err(BridgeError::invalid_parameter(
                "port",
                format!("not an integer: {}", other),
            ))
        }
    };

    u16::try_from(port)
        .ok()
        .filter(|p| *p != 0)
        .ok_or_else(|| {
            BridgeError::invalid_parameter("port", format!("{} is out of range 1-65535", port))
        })
}
