use chromaview::{ApiVersion, ChromaSettings, FetchOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "chromaview-server")]
#[command(about = "HTTP server for browsing ChromaDB collections")]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "CHROMAVIEW_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "CHROMAVIEW_PORT")]
    pub port: u16,

    /// Enable CORS for all origins
    #[arg(long, default_value = "false", env = "CHROMAVIEW_CORS")]
    pub cors: bool,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "CHROMAVIEW_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Directory with the browser UI, served at `/`
    #[arg(long, env = "CHROMAVIEW_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// ChromaDB tenant
    #[arg(long, default_value = chromaview::store::chroma::DEFAULT_TENANT, env = "CHROMAVIEW_TENANT")]
    pub tenant: String,

    /// ChromaDB database
    #[arg(long, default_value = chromaview::store::chroma::DEFAULT_DATABASE, env = "CHROMAVIEW_DATABASE")]
    pub database: String,

    /// ChromaDB REST surface: v1 for 0.4/0.5 servers, v2 for 0.6 and later
    #[arg(long, default_value = "v2", env = "CHROMAVIEW_API_VERSION")]
    pub api_version: ApiVersion,

    /// Ask the store for embeddings when reading collections
    #[arg(long, default_value = "false", env = "CHROMAVIEW_INCLUDE_EMBEDDINGS")]
    pub include_embeddings: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn chroma_settings(&self) -> ChromaSettings {
        ChromaSettings {
            tenant: self.tenant.clone(),
            database: self.database.clone(),
            api_version: self.api_version,
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            include_embeddings: self.include_embeddings,
        }
    }
}
