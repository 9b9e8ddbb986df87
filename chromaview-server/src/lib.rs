//! chromaview HTTP server library.
//!
//! Exposes the chromaview core to the browser UI: connecting to a ChromaDB
//! server, checking its heartbeat and paging through collection contents.

pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use app::build_app;
pub use config::ServerConfig;
pub use state::AppState;
