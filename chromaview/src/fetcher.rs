use crate::connection::ConnectionState;
use crate::error::Result;
use crate::record::RawRecordSet;
use crate::store::FetchOptions;

/// Reads whole collections through the active store handle.
#[derive(Debug, Clone, Copy)]
pub struct CollectionFetcher<'a> {
    state: &'a ConnectionState,
    options: FetchOptions,
}

impl<'a> CollectionFetcher<'a> {
    pub fn new(state: &'a ConnectionState, options: FetchOptions) -> Self {
        Self { state, options }
    }

    /// Fetch every record of `name` without validating any field.
    pub async fn fetch(&self, name: &str) -> Result<RawRecordSet> {
        let client = self.state.current().await?;
        tracing::debug!(collection = name, endpoint = client.endpoint(), "Fetching collection");
        let reply = client.get_records(name, self.options).await?;
        RawRecordSet::from_json(reply)
    }
}
