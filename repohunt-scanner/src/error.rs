use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{url} answered with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Proxy pool is empty")]
    EmptyProxyPool,

    #[error("Search request needs at least one keyword")]
    EmptyKeywords,
}

pub type Result<T> = std::result::Result<T, ScanError>;
