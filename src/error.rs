//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("AI_GATEWAY_API_KEY is not configured")]
    MissingApiKey,

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("AI credits exhausted. Please add credits to continue.")]
    CreditsExhausted,

    #[error("AI gateway error (status {status}): {body}")]
    Gateway { status: u16, body: String },

    #[error("No content generated")]
    EmptyGeneration,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status code this error maps to at the endpoint boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::RateLimited => 429,
            Error::CreditsExhausted => 402,
            _ => 500,
        }
    }

    /// Message carried in the `{"error": ...}` response body.
    ///
    /// Upstream gateway failures keep their status/body in logs only and
    /// surface a generic message to the caller.
    pub fn client_message(&self) -> String {
        match self {
            Error::Gateway { .. } => "Failed to generate course content".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_maps_to_429_with_verbatim_message() {
        let err = Error::RateLimited;
        assert_eq!(err.status_code(), 429);
        assert_eq!(
            err.client_message(),
            "Rate limit exceeded. Please try again in a moment."
        );
    }

    #[test]
    fn test_credits_exhausted_maps_to_402_with_verbatim_message() {
        let err = Error::CreditsExhausted;
        assert_eq!(err.status_code(), 402);
        assert_eq!(
            err.client_message(),
            "AI credits exhausted. Please add credits to continue."
        );
    }

    #[test]
    fn test_gateway_error_hides_upstream_body() {
        let err = Error::Gateway {
            status: 503,
            body: "internal provider detail".to_string(),
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.client_message(), "Failed to generate course content");
    }

    #[test]
    fn test_missing_api_key_is_500() {
        let err = Error::MissingApiKey;
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.client_message(), "AI_GATEWAY_API_KEY is not configured");
    }

    #[test]
    fn test_empty_generation_is_500() {
        let err = Error::EmptyGeneration;
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.client_message(), "No content generated");
    }
}
