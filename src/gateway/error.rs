//! Error type for gateway calls.

use thiserror::Error;

/// Any failure reported by a [`FetchGateway`](super::FetchGateway) call.
///
/// `Clone` so a single failure can be delivered to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The source could not be reached or refused to answer.
    #[error("Gateway unavailable: {reason}")]
    Unavailable { reason: String },

    /// The request parameters were rejected.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        TransportError::Unavailable {
            reason: reason.into(),
        }
    }

    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::Unavailable { .. } => "unavailable",
            TransportError::InvalidRequest(_) => "invalid_request",
        }
    }
}
