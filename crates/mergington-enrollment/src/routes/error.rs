use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::store::EnrollmentError;

/// Errors surfaced by the HTTP handlers, rendered as `{"detail": ...}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),

    /// The activity segment of the path could not be decoded; it cannot
    /// name any activity
    #[error("Activity not found")]
    UnreadablePath(String),

    /// The request was routed but its parameters could not be read
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Enrollment(EnrollmentError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Enrollment(
                EnrollmentError::AlreadyEnrolled { .. } | EnrollmentError::NotEnrolled { .. },
            ) => StatusCode::BAD_REQUEST,
            ApiError::UnreadablePath(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::UnreadablePath(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}
