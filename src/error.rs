//! Error types and HTTP error mapping for the gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::upstream::Upstream;

/// Body returned for every failed upstream call. Nothing else reaches the client.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Sorry, something went wrong";

/// Body returned when the inbound query cannot be used to build an upstream request.
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query parameters";

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The outbound request never produced a response
    #[error("{upstream} request failed: {source}")]
    Transport {
        upstream: Upstream,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status
    #[error("{upstream} responded with status {status}")]
    Status {
        upstream: Upstream,
        status: reqwest::StatusCode,
    },

    /// The upstream body did not have the expected shape
    #[error("{upstream} returned an unexpected payload: {message}")]
    Payload { upstream: Upstream, message: String },

    /// No API key is configured for the upstream
    #[error("no API key configured for {upstream}")]
    MissingCredential { upstream: Upstream },

    /// Required query parameters are missing or malformed
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl GatewayError {
    /// Create a new payload error
    pub fn payload<S: Into<String>>(upstream: Upstream, message: S) -> Self {
        Self::Payload {
            upstream,
            message: message.into(),
        }
    }

    /// Create a new query validation error
    pub fn invalid_query<S: Into<String>>(message: S) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The upstream this error belongs to, if any
    #[must_use]
    pub fn upstream(&self) -> Option<Upstream> {
        match self {
            GatewayError::Transport { upstream, .. }
            | GatewayError::Status { upstream, .. }
            | GatewayError::Payload { upstream, .. }
            | GatewayError::MissingCredential { upstream } => Some(*upstream),
            GatewayError::InvalidQuery { .. } | GatewayError::Config { .. } => None,
        }
    }

    /// HTTP status sent to the client
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            GatewayError::InvalidQuery { .. } => INVALID_QUERY_MESSAGE,
            _ => UPSTREAM_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            GatewayError::InvalidQuery { .. } => {
                tracing::warn!(error = %self, "Rejected request");
            }
            _ => {
                tracing::error!(
                    upstream = self.upstream().map(|u| u.name()),
                    error = %self,
                    "Request failed"
                );
            }
        }
        (self.status_code(), self.user_message()).into_response()
    }
}
