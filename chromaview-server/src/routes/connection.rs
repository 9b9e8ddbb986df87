use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chromaview::{Operation, Status};

use crate::{
    dto::{
        request::ConnectRequest,
        response::{ConnectResponse, HeartbeatResponse},
    },
    error::{ApiError, ApiResult},
    state::AppState,
};

/// GET /api/heartbeat - Check the active store connection
pub async fn heartbeat(State(state): State<AppState>) -> ApiResult<HeartbeatResponse> {
    let heartbeat = state
        .connection
        .heartbeat()
        .await
        .map_err(|e| ApiError::from_bridge(Operation::Heartbeat, e))?;

    Ok(Json(HeartbeatResponse {
        status: Status::Connected,
        heartbeat,
    }))
}

/// POST /api/connect - Connect to a store and list its collections
pub async fn connect(
    State(state): State<AppState>,
    body: Result<Json<ConnectRequest>, JsonRejection>,
) -> ApiResult<ConnectResponse> {
    let Json(req) = body
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e.body_text())))?;

    let connected = state
        .connection
        .connect(req.host(), &req.port)
        .await
        .map_err(|e| ApiError::from_bridge(Operation::Connect, e))?;

    tracing::info!(
        endpoint = %connected.endpoint,
        collections = connected.collections.len(),
        "Connected to ChromaDB"
    );

    Ok(Json(ConnectResponse {
        status: Status::Success,
        message: "Connected successfully".to_string(),
        collections: connected.collections,
    }))
}
