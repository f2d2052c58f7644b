//! HTTP-facing error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use labnav_common::NavigatorError;

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Navigator(#[from] NavigatorError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Navigation state is unavailable")]
    StatePoisoned,
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Navigator(err) => match err {
                NavigatorError::NotFound(_) => StatusCode::NOT_FOUND,
                NavigatorError::InvalidDocType(_) => StatusCode::BAD_REQUEST,
                NavigatorError::Http(e) if e.is_connect() || e.is_timeout() => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                NavigatorError::Http(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Template(_) | WebError::StatePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
