//! Error types for responder calls.

use thiserror::Error;

/// Failure of a single request to the responder.
#[derive(Error, Debug)]
pub enum ResponderError {
    /// Transport failure (connection refused, reset, timed out).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The responder answered with a non-2xx status.
    #[error("Responder returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics only.
        body: String,
    },

    /// The success body did not match the expected reply shape.
    #[error("Malformed reply: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ResponderError {
    /// Short machine-friendly label used in log events.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) => "transport",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }
}
