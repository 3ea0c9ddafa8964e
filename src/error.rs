use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PoolError {
    #[error("provider unreachable: {0}")]
    Network(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("normalization failed: {0}")]
    Normalize(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for PoolError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for PoolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
