use thiserror::Error;

/// Custom error type for quote-gateway operations.
/// A symbol the gateway does not recognize is not an error; the gateway
/// returns `Ok(None)` for that. Errors here mean the gateway itself failed.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
