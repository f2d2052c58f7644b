use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("No route for path: {0}")]
    NotFound(String),

    #[error("Invalid route table: {0}")]
    InvalidRouteTable(String),

    #[error("Unknown document type: {0}")]
    InvalidDocType(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NavigatorError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigatorError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
