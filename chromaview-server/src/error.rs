use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chromaview::{build_error, BridgeError, ErrorEnvelope, Operation, Status};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorEnvelope,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorEnvelope {
                status: Status::Error,
                message: Some(message.into()),
                kind: None,
            },
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    /// Map a core error for `op` to its status code and envelope.
    ///
    /// The full error is logged here; the client only sees the envelope.
    pub fn from_bridge(op: Operation, err: BridgeError) -> Self {
        let status = if err.is_client_error() {
            tracing::warn!(?op, kind = err.kind(), "Request rejected: {}", err);
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(?op, kind = err.kind(), error = ?err, "Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        Self {
            status,
            body: build_error(op, &err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Turn a handler panic into the uncategorized-failure envelope.
///
/// Only `/api/collection` does enough work to panic, so the reply is worded
/// for that operation.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    let err = BridgeError::unknown("Panic", message);
    ApiError::from_bridge(Operation::Collection, err).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        let cases = [
            (BridgeError::Disconnected, StatusCode::BAD_REQUEST),
            (BridgeError::invalid_parameter("page", "x"), StatusCode::BAD_REQUEST),
            (BridgeError::store("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (BridgeError::data_shape("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (BridgeError::unknown("Panic", "x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            let api = ApiError::from_bridge(Operation::Collection, err);
            assert_eq!(api.status, expected);
            assert_eq!(api.body.status, Status::Error);
        }
    }

    #[test]
    fn test_panic_payloads() {
        let response = handle_panic(Box::new("index out of range"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(17_u32));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
