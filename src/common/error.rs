//! Centralized error stage.
//!
//! Every failure a request can produce is an [`AppError`]. Handlers return
//! it, middleware rejects with it and extractors use it as their rejection,
//! so all of them end up in [`handle_error`], which logs the failure and
//! renders the error envelope.

use std::error::Error as _;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::common::response::ApiResponse;
use crate::infrastructure::db::error::RepositoryError;

/// Message sent to clients for any 5xx.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something failed.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("repository failure")]
    Repository(#[from] RepositoryError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Repository(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(first_validation_message(&errors))
    }
}

/// Picks the first message of the alphabetically first failing field.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("\"{field}\" is invalid"),
            })
        })
        .unwrap_or_else(|| "Invalid request body".to_string())
}

pub fn handle_error(err: AppError) -> Response {
    let status = err.status();

    let message = if status.is_server_error() {
        match err.source() {
            Some(source) => error!(error = %err, source = %source, "request failed"),
            None => error!(error = %err, "request failed"),
        }
        INTERNAL_ERROR_MESSAGE.to_string()
    } else {
        warn!(status = status.as_u16(), error = %err, "request rejected");
        err.to_string()
    };

    (status, Json(ApiResponse::<()>::error(&message))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use validator::Validate;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn client_errors_keep_their_message() {
        let response = handle_error(AppError::NotFound("nope".into()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "nope");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn server_errors_hide_details() {
        let err = AppError::Repository(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        let response = handle_error(err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
    }

    #[derive(Validate)]
    struct Pair {
        #[validate(length(min = 1, message = "a is empty"))]
        a: String,
        #[validate(length(min = 1))]
        b: String,
    }

    #[test]
    fn first_message_is_taken_from_first_field() {
        let errors = Pair { a: String::new(), b: String::new() }.validate().unwrap_err();
        assert_eq!(first_validation_message(&errors), "a is empty");
    }

    #[test]
    fn missing_message_falls_back_to_field_name() {
        let errors = Pair { a: "x".into(), b: String::new() }.validate().unwrap_err();
        assert_eq!(first_validation_message(&errors), "\"b\" is invalid");
    }
}
