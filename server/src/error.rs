use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Request rejections. Each one is answered with a plain-text body and no
/// change to the scoreboard.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("error parsing count: {0}")]
    InvalidCount(String),

    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCount(_) | ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Rejected request: {}", self);
        (self.status(), format!("{}\n", self)).into_response()
    }
}
