use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// Transport failures and response bodies that are not JSON.
    #[error("check-in request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid cookie header: {0}")]
    InvalidCookie(#[from] InvalidHeaderValue),
}
