// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use mergington_activities::config::Config;
use mergington_activities::db::ActivityDirectory;
use mergington_activities::routes::create_router;
use mergington_activities::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Config pointing at the bundled front-end regardless of working directory.
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        ..Config::default()
    }
}

/// Create a test app over a freshly seeded directory.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(test_config(), ActivityDirectory::seeded()));
    (create_router(state.clone()), state)
}

/// Send a bodyless request and decode the JSON response.
#[allow(dead_code)]
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[allow(dead_code)]
pub async fn get_activities(app: &Router) -> serde_json::Value {
    let (status, json) = send_json(app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    json
}

/// Fetch a response body as text, preserving key order in JSON objects.
#[allow(dead_code)]
pub async fn get_text(app: &Router, uri: &str) -> String {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
