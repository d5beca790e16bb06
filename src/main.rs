// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mergington Activities API Server
//!
//! Lists extracurricular activities and handles student signups.

use mergington_activities::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Mergington Activities API");

    if let Some(path) = &config.seed_path {
        tracing::info!(path = %path.display(), "Loading activities from seed file");
    }

    // Build shared state
    let state = Arc::new(AppState::from_config(config.clone())?);
    tracing::info!(
        count = state.directory.len(),
        enforce_capacity = state.directory.enforces_capacity(),
        static_dir = %config.static_dir.display(),
        "Activity directory ready"
    );

    // Build router
    let app = mergington_activities::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mergington_activities=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
