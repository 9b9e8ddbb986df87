//! Boundary to the external vector store.
//!
//! The rest of the crate only sees [`StoreClient`] handles produced by a
//! [`StoreConnector`]; [`chroma`] provides the HTTP implementation.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::Result;

pub mod chroma;

pub use chroma::{ApiVersion, ChromaClient, ChromaConnector, ChromaSettings};

/// Which optional fields to request when reading a whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchOptions {
    pub include_embeddings: bool,
}

impl FetchOptions {
    /// Field names for the store's `include` list.
    pub fn include(&self) -> Vec<&'static str> {
        let mut fields = vec!["metadatas", "documents"];
        if self.include_embeddings {
            fields.push("embeddings");
        }
        fields
    }
}

/// An open session with the store.
#[async_trait]
pub trait StoreClient: Send + Sync + fmt::Debug {
    /// Address this client talks to, for logging.
    fn endpoint(&self) -> &str;

    /// Liveness check. Returns the store's heartbeat token.
    async fn heartbeat(&self) -> Result<u64>;

    /// Names of every collection in the store.
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// The complete, unfiltered contents of a collection, exactly as returned.
    async fn get_records(&self, collection: &str, options: FetchOptions) -> Result<JsonValue>;
}

/// Builds store clients. Construction must not touch the network.
pub trait StoreConnector: Send + Sync {
    fn connect(&self, host: &str, port: u16) -> Result<Arc<dyn StoreClient>>;
}
