use thiserror::Error;

/// Errors produced while talking to the store or shaping its replies.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// An operation needed an active store handle and none has been stored.
    #[error("Not connected to ChromaDB")]
    Disconnected,

    /// A caller-supplied value (host, port, page, limit) was malformed or out
    /// of range. `param` names the offending value.
    #[error("{message}")]
    InvalidParameter { param: String, message: String },

    /// The store rejected or failed a request, including unknown collections.
    #[error("{0}")]
    Store(String),

    /// A store reply did not have the expected structure.
    #[error("{0}")]
    DataShape(String),

    /// Anything not covered above. `kind` names the underlying failure type.
    #[error("{message}")]
    Unknown { kind: String, message: String },
}

impl BridgeError {
    pub fn invalid_parameter(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: msg.into(),
        }
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn data_shape(msg: impl Into<String>) -> Self {
        Self::DataShape(msg.into())
    }

    pub fn unknown(kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Unknown {
            kind: kind.into(),
            message: msg.into(),
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &str {
        match self {
            Self::Disconnected => "Disconnected",
            Self::InvalidParameter { .. } => "InvalidParameter",
            Self::Store(_) => "StoreError",
            Self::DataShape(_) => "DataShapeError",
            Self::Unknown { kind, .. } => kind,
        }
    }

    /// Whether the failure was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Disconnected | Self::InvalidParameter { .. })
    }
}

impl From<reqwest::Error> for BridgeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BridgeError::data_shape(format!("Invalid data format from ChromaDB: {}", err))
        } else {
            BridgeError::store(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
