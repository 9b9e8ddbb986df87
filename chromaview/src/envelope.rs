//! Reply envelopes sent back to the browser UI.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::BridgeError;
use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Connected,
    Disconnected,
    Error,
}

/// Operation an envelope answers. Decides how error messages are worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Heartbeat,
    Connect,
    Collection,
}

/// One page of a collection as the UI consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionData {
    pub ids: Vec<JsonValue>,
    pub documents: Vec<JsonValue>,
    pub metadatas: Vec<JsonValue>,
    pub embeddings: Vec<JsonValue>,
    /// Record count before pagination.
    pub count: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionEnvelope {
    pub status: Status,
    pub data: CollectionData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Wrap a page in the success envelope.
pub fn build_collection(page: Page) -> CollectionEnvelope {
    let total_pages = page.total_pages();
    CollectionEnvelope {
        status: Status::Success,
        data: CollectionData {
            ids: page.ids,
            documents: page.documents,
            metadatas: page.metadatas,
            embeddings: page.embeddings,
            count: page.total,
            page: page.page,
            limit: page.limit,
            total_pages,
        },
    }
}

/// Build the client-facing envelope for a failed operation.
///
/// Only uncategorized failures carry a `type` tag.
pub fn build_error(op: Operation, err: &BridgeError) -> ErrorEnvelope {
    if op == Operation::Heartbeat && matches!(err, BridgeError::Disconnected) {
        return ErrorEnvelope {
            status: Status::Disconnected,
            message: None,
            kind: None,
        };
    }

    let message = match (op, err) {
        (_, BridgeError::Disconnected) => err.to_string(),
        (Operation::Connect, BridgeError::InvalidParameter { param, message }) => {
            format!("Invalid {}: {}", param, message)
        }
        (_, BridgeError::InvalidParameter { message, .. }) => format!("Value error: {}", message),
        (Operation::Heartbeat, BridgeError::Store(msg)) => msg.clone(),
        (_, BridgeError::Store(msg)) => format!("ChromaDB error: {}", msg),
        (_, BridgeError::DataShape(msg)) => msg.clone(),
        (Operation::Connect, BridgeError::Unknown { message, .. }) => {
            format!("Connection failed: {}", message)
        }
        (Operation::Collection, BridgeError::Unknown { message, .. }) => {
            format!("Error getting collection data: {}", message)
        }
        (Operation::Heartbeat, BridgeError::Unknown { message, .. }) => message.clone(),
    };

    let kind = match err {
        BridgeError::Unknown { kind, .. } => Some(kind.clone()),
        _ => None,
    };

    ErrorEnvelope {
        status: Status::Error,
        message: Some(message),
        kind,
    }
}
