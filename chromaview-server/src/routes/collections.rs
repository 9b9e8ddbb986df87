use axum::{
    extract::{Path, Query, State},
    Json,
};
use chromaview::{
    collection_page, BridgeError, CollectionEnvelope, Operation, DEFAULT_LIMIT, DEFAULT_PAGE,
};

use crate::{
    dto::request::CollectionQuery,
    error::{ApiError, ApiResult},
    state::AppState,
};

/// GET /api/collection/{name} - One page of a collection's records
pub async fn get_collection(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<CollectionQuery>,
) -> ApiResult<CollectionEnvelope> {
    let to_api = |e: BridgeError| ApiError::from_bridge(Operation::Collection, e);

    state.connection.current().await.map_err(to_api)?;

    let page = parse_int("page", query.page.as_deref(), DEFAULT_PAGE).map_err(to_api)?;
    let limit = parse_int("limit", query.limit.as_deref(), DEFAULT_LIMIT).map_err(to_api)?;
    tracing::debug!(collection = %name, page, limit, "Collection page requested");

    let envelope = collection_page(&state.connection, state.fetch, &name, page, limit)
        .await
        .map_err(to_api)?;

    Ok(Json(envelope))
}

fn parse_int(field: &str, raw: Option<&str>, default: i64) -> Result<i64, BridgeError> {
    match raw {
        None => Ok(default),
        Some(s) => s.trim().parse().map_err(|_| {
            BridgeError::invalid_parameter(field, format!("invalid integer for {}: '{}'", field, s))
        }),
    }
}
