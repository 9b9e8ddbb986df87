use std::sync::Arc;

use chromaview::{ChromaConnector, ConnectionState, FetchOptions, StoreConnector};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub connection: Arc<ConnectionState>,
    pub fetch: FetchOptions,
}

impl AppState {
    pub fn new(connector: Arc<dyn StoreConnector>, fetch: FetchOptions) -> Self {
        Self {
            connection: Arc::new(ConnectionState::new(connector)),
            fetch,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let connector = ChromaConnector::new(config.chroma_settings());
        Self::new(Arc::new(connector), config.fetch_options())
    }
}
