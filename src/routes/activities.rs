// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing and roster routes.

use crate::error::{AppError, Result};
use crate::models::Directory;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route("/activities/{activity_name}/unregister", delete(unregister))
}

#[derive(Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

impl EmailQuery {
    /// Presence check only; the address is stored exactly as given and
    /// its format is not validated.
    fn require(self) -> Result<String> {
        self.email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest(AppError::EMAIL_REQUIRED.to_string()))
    }
}

/// Confirmation returned by roster mutations.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct MessageResponse {
    pub message: String,
}

async fn list_activities(State(state): State<Arc<AppState>>) -> Json<Directory> {
    Json(state.directory.list())
}

async fn signup(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(activity_name), _): WithRejection<Path<String>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<EmailQuery>, AppError>,
) -> Result<Json<MessageResponse>> {
    let email = query.require()?;
    let message = state.directory.signup(&activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}

async fn unregister(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(activity_name), _): WithRejection<Path<String>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<EmailQuery>, AppError>,
) -> Result<Json<MessageResponse>> {
    let email = query.require()?;
    let message = state.directory.unregister(&activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}
