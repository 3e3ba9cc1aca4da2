//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error body
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        code: Option<u16>,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Non-success response without a readable error body
    #[error("Unexpected response {status}: {body}")]
    Unexpected { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message to show the user when the server reported one
    ///
    /// Transport failures have no server message and return `None`.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// True when the server was reached and answered with an error status
    pub fn is_server_response(&self) -> bool {
        matches!(self, ClientError::Api { .. } | ClientError::Unexpected { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
