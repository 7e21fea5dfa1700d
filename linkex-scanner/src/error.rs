use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid argument: {0} must be provided")]
    InvalidArgument(&'static str),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetch failed: {0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
