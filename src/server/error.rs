use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::label::LabelError;
use crate::sheet::SheetError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain errors from [`crate::label`] and [`crate::sheet`] and
/// adds HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A label rendering error.
    #[error(transparent)]
    Label(#[from] LabelError),

    /// A spreadsheet reading error.
    #[error(transparent)]
    Sheet(#[from] SheetError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Label(err) => match err {
                LabelError::EmptyName => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    err.to_string(),
                ),
                other => {
                    tracing::error!(error = %other, "Label rendering failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Sheet(err) => classify_sheet_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sheet error into an HTTP status, error code, and message.
///
/// - Files the reader cannot make sense of map to 400.
/// - Upstream fetch failures map to 502.
/// - Local IO failures map to 500 with a sanitized message.
fn classify_sheet_error(err: &SheetError) -> (StatusCode, &'static str, String) {
    match err {
        SheetError::UnsupportedType(_) | SheetError::Csv(_) | SheetError::Workbook(_) => {
            (StatusCode::BAD_REQUEST, "INVALID_SHEET", err.to_string())
        }
        SheetError::Fetch(fetch_err) => {
            tracing::warn!(error = %fetch_err, "Sheet fetch failed");
            (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", err.to_string())
        }
        SheetError::Io(io_err) => {
            tracing::error!(error = %io_err, "Sheet IO error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
