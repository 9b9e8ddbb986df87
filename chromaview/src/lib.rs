//! Core of the chromaview bridge.
//!
//! Holds the connection to a ChromaDB server and turns its collection replies,
//! whose fields may be missing, mistyped or ragged, into consistent paginated
//! envelopes for the browser UI.

pub mod connection;
pub mod envelope;
pub mod error;
pub mod fetcher;
pub mod page;
pub mod record;
pub mod store;
pub mod view;

pub use connection::{parse_port, Connected, ConnectionState};
pub use envelope::{
    build_collection, build_error, CollectionData, CollectionEnvelope, ErrorEnvelope, Operation,
    Status,
};
pub use error::{BridgeError, Result};
pub use fetcher::CollectionFetcher;
pub use page::{paginate, total_pages, Page, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use record::{normalize, FieldValue, NormalizedRecordSet, RawRecordSet};
pub use store::{
    ApiVersion, ChromaClient, ChromaConnector, ChromaSettings, FetchOptions, StoreClient,
    StoreConnector,
};
pub use view::collection_page;
