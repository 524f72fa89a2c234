use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Every handler failure, answered as a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    /// A service rule rejected the input.
    #[error("{0}")]
    BadRequest(String),
    /// The body failed to parse or broke field constraints.
    #[error("{0}")]
    InvalidBody(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
            ServiceError::Model(ModelError::Validation(msg)) => ApiError::BadRequest(msg),
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
