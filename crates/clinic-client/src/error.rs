use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid server URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}
