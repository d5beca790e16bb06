// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Root redirect, health, static files and seeding tests.

use axum::http::{header, StatusCode};
use mergington_activities::config::Config;
use mergington_activities::services::SeedError;
use mergington_activities::AppState;
use std::fs;
use tower::ServiceExt;

mod common;
use common::{create_test_app, create_test_app_with, json_body, request};

#[tokio::test]
async fn test_root_redirects_to_landing_page() {
    let (app, _state) = create_test_app();

    let response = app.oneshot(request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = create_test_app();

    let response = app.oneshot(request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("X-Content-Type-Options").is_some());

    let data = json_body(response).await;
    assert_eq!(data["status"], "ok");
}

#[tokio::test]
async fn test_static_files_served() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>Mergington</h1>").unwrap();

    let (app, _state) = create_test_app_with(Config {
        static_dir: dir.path().to_path_buf(),
        ..Config::default()
    });

    let response = app
        .clone()
        .oneshot(request("GET", "/static/index.html"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Landing page pulls app.js and styles.css from /static on the same origin
    let csp = response
        .headers()
        .get("Content-Security-Policy")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(csp.contains("default-src 'self'"), "unexpected CSP {}", csp);
    assert!(!csp.contains("'none';"));

    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"<h1>Mergington</h1>");

    let response = app
        .oneshot(request("GET", "/static/missing.js"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seed_file_replaces_builtin_activities() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("seed.json");
    fs::write(
        &seed_path,
        r#"{
            "Robotics": {
                "description": "Build and program robots",
                "schedule": "Mondays, 3:30 PM - 5:00 PM",
                "max_participants": 1,
                "participants": []
            }
        }"#,
    )
    .unwrap();

    let (app, state) = create_test_app_with(Config {
        seed_path: Some(seed_path),
        enforce_capacity: false,
        ..Config::default()
    });
    assert_eq!(state.directory.len(), 1);

    for email in ["a@test.edu", "b@test.edu"] {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                &format!("/activities/Robotics/signup?email={}", email),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let data = json_body(app.oneshot(request("GET", "/activities")).await.unwrap()).await;
    assert_eq!(
        data["Robotics"]["participants"],
        serde_json::json!(["a@test.edu", "b@test.edu"])
    );
}

#[test]
fn test_missing_seed_file_fails() {
    let result = AppState::from_config(Config {
        seed_path: Some("/nonexistent/seed.json".into()),
        ..Config::default()
    });
    assert!(matches!(result, Err(SeedError::Io(_))));
}
