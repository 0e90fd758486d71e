use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Invalid NASDAQ symbol")]
    InvalidSymbol,

    #[error("No news found")]
    NoNewsFound,

    #[error("News provider timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("News provider failed: {0}")]
    Provider(String),

    #[error("Failed to parse provider output: {0}")]
    ParseError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
