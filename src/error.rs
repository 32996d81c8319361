//! API error types.
//!
//! `Display` output is shown to the user verbatim.

use thiserror::Error;

/// Message shown when the server answers with something that is not the expected JSON.
pub const INVALID_RESPONSE: &str = "Respon tidak valid dari server";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, DNS).
    #[error("{0}")]
    Network(String),

    /// Body was not JSON, or not the shape the caller expected.
    #[error("{}", INVALID_RESPONSE)]
    InvalidResponse,

    /// Non-2xx status. `message` is the server's `error` field or `HTTP {status}`.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message to display.
        message: String,
    },

    /// The request body could not be built.
    #[error("{0}")]
    Encode(String),

    /// localStorage was unavailable or rejected the write.
    #[error("{0}")]
    Storage(&'static str),
}

impl ApiError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Server { status, message }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_message() {
        assert_eq!(ApiError::InvalidResponse.to_string(), INVALID_RESPONSE);
    }

    #[test]
    fn test_server_error_prefers_server_message() {
        let err = ApiError::server(401, Some("Token tidak valid".to_string()));
        assert_eq!(err.to_string(), "Token tidak valid");
    }

    #[test]
    fn test_server_error_falls_back_to_status() {
        assert_eq!(ApiError::server(500, None).to_string(), "HTTP 500");
        assert_eq!(ApiError::server(404, Some(String::new())).to_string(), "HTTP 404");
    }
}
