use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the quote gateway.
///
/// None of these are retried or recovered internally; the caller decides
/// what to do with a failed quote.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The supplier could not be reached or the connection broke mid-flight.
    #[error("failed to reach massage service: {0}")]
    Transport(#[source] reqwest::Error),

    /// The supplier answered with a non-success status code.
    #[error("massage service returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not valid JSON for the quote schema.
    #[error("failed to decode massage service response: {source}; body: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl GatewayError {
    /// Status code carried by a `Status` error, if that is what this is.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
