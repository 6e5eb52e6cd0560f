//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use credential_service::{api::create_router, AppState, Config};

pub const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        _ => None,
    })
    .unwrap()
}

/// Router over a fresh, empty in-memory store.
pub fn test_app() -> Router {
    let config = test_config();
    create_router(AppState::from_config(&config), &config)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// GET `uri` and return the status with the response headers.
pub async fn get_headers(app: &Router, uri: &str, bearer: Option<&str>) -> (StatusCode, HeaderMap) {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = app.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
    (response.status(), response.headers().clone())
}

pub async fn register(app: &Router, email: &str, password: &str, name: Option<&str>) -> (StatusCode, Value) {
    let mut body = serde_json::json!({ "email": email, "password": password });
    if let Some(name) = name {
        body["name"] = Value::from(name);
    }
    send(app, Method::POST, "/api/v1/auth/register", None, Some(body)).await
}

pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await
}

/// Registers and logs in, returning `(access_token, refresh_token)`.
pub async fn signed_in(app: &Router, email: &str, password: &str) -> (String, String) {
    let (status, _) = register(app, email, password, None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = login(app, email, password).await;
    assert_eq!(status, StatusCode::OK);

    (
        body["accessToken"].as_str().unwrap().to_string(),
        body["refreshToken"].as_str().unwrap().to_string(),
    )
}

pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}
