use thiserror::Error;

/// Why a lookup produced no reply. Callers treat both kinds the same way: try the next source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Request failed, timed out, returned a non-success status or an undecodable body.
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsed but carried no usable field.
    #[error("Empty result: {0}")]
    EmptyResult(String),
}

impl LookupError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn empty(msg: impl Into<String>) -> Self {
        Self::EmptyResult(msg.into())
    }

    /// `network` or `empty_result`, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::EmptyResult(_) => "empty_result",
        }
    }
}
