//! Request pipeline for browsing a collection.

use crate::connection::ConnectionState;
use crate::envelope::{build_collection, CollectionEnvelope};
use crate::error::Result;
use crate::fetcher::CollectionFetcher;
use crate::page::{paginate, PageRequest};
use crate::record::normalize;
use crate::store::FetchOptions;

/// Fetch, normalize and paginate one page of `name`.
///
/// The connection is checked first, then the page parameters, both before the
/// store is contacted.
pub async fn collection_page(
    state: &ConnectionState,
    options: FetchOptions,
    name: &str,
    page: i64,
    limit: i64,
) -> Result<CollectionEnvelope> {
    state.current().await?;
    PageRequest::new(page, limit)?;

    let raw = CollectionFetcher::new(state, options).fetch(name).await?;
    let (records, core_len) = normalize(raw);
    let page = paginate(records, core_len, page, limit)?;

    tracing::info!(
        collection = name,
        total = page.total,
        page = page.page,
        returned = page.len(),
        total_pages = page.total_pages(),
        "Served collection page"
    );
    Ok(build_collection(page))
}
