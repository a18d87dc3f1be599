use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("invalid location query: {0}")]
    InvalidInput(String),

    #[error("places provider returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("HTTP error calling places provider: {0}")]
    Http(#[from] reqwest::Error),

    #[error("places provider is not configured")]
    NotConfigured,
}
