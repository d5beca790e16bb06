// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with the current roster (duplicate signup,
    /// unregister of a non-participant, full activity).
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const ACTIVITY_NOT_FOUND: &'static str = "Activity not found";
    pub const ALREADY_SIGNED_UP: &'static str = "Student is already signed up for this activity";
    pub const NOT_REGISTERED: &'static str = "Student is not registered for this activity";
    pub const ACTIVITY_FULL: &'static str = "Activity is full";
    pub const EMAIL_REQUIRED: &'static str = "Email is required";

    pub fn activity_not_found() -> Self {
        AppError::NotFound(Self::ACTIVITY_NOT_FOUND.to_string())
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl AppError {
    /// Extractor rejections keep their status class: client mistakes are
    /// bad requests, anything else (route/extractor mismatch) is internal.
    fn from_rejection(status: StatusCode, body_text: String) -> Self {
        if status.is_server_error() {
            AppError::Internal(anyhow::anyhow!(body_text))
        } else {
            AppError::BadRequest(body_text)
        }
    }
}

/// JSON error response body
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::BadRequest(msg) => {
                msg.clone()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::{Path, Request};
    use axum::{routing::get, Router};
    use axum_extra::extract::WithRejection;
    use tower::ServiceExt; // for oneshot

    #[tokio::test]
    async fn test_path_mismatch_is_internal_json() {
        // Route without parameters, extractor expecting one.
        async fn handler(
            WithRejection(Path(name), _): WithRejection<Path<String>, AppError>,
        ) -> String {
            name
        }

        let app = Router::new().route("/", get(handler));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "Internal server error");
    }

    #[test]
    fn test_from_rejection_status_class() {
        assert!(matches!(
            AppError::from_rejection(StatusCode::BAD_REQUEST, "bad".to_string()),
            AppError::BadRequest(ref m) if m == "bad"
        ));
        assert!(matches!(
            AppError::from_rejection(StatusCode::INTERNAL_SERVER_ERROR, "oops".to_string()),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::activity_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Conflict(AppError::ALREADY_SIGNED_UP.to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest(AppError::EMAIL_REQUIRED.to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_detail() {
        assert_eq!(
            AppError::activity_not_found().to_string(),
            "Activity not found"
        );
    }
}
