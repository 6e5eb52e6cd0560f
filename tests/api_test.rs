//! Integration tests for the HTTP API.
//!
//! Every test drives the real router over a fresh in-memory store.

mod common;

use axum::http::{Method, StatusCode};
use chrono::Duration;
use serde_json::json;
use uuid::Uuid;

use common::{error_code, get_headers, login, register, send, signed_in, test_app};
use credential_service::services::TokenService;

#[tokio::test]
async fn test_health_reports_ok() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_hardening_headers_on_every_response() {
    let app = test_app();
    let (access, _) = signed_in(&app, "alice@example.com", "secret123").await;

    let cases = [
        ("/health", None, StatusCode::OK),
        ("/api/v1/auth/me", Some(access.as_str()), StatusCode::OK),
        ("/api/v1/auth/me", None, StatusCode::UNAUTHORIZED),
    ];

    for (uri, bearer, expected) in cases {
        let (status, headers) = get_headers(&app, uri, bearer).await;
        assert_eq!(status, expected, "{}", uri);
        assert_eq!(headers["x-content-type-options"], "nosniff", "{}", uri);
        assert_eq!(headers["x-frame-options"], "DENY", "{}", uri);
        assert_eq!(headers["referrer-policy"], "no-referrer", "{}", uri);
    }
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let app = test_app();

    let (status, body) = register(&app, "alice@example.com", "secret123", Some("Alice")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["name"], "Alice");
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
    let id = body["id"].as_str().unwrap().to_string();

    let (status, tokens) = login(&app, "alice@example.com", "secret123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tokens["tokenType"], "Bearer");
    assert_eq!(tokens["expiresIn"], 900);
    let access = tokens["accessToken"].as_str().unwrap().to_string();
    let refresh = tokens["refreshToken"].as_str().unwrap().to_string();

    let (status, me) = send(&app, Method::GET, "/api/v1/auth/me", Some(&access), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], id.as_str());
    assert_eq!(me["email"], "alice@example.com");
    assert_eq!(me["name"], "Alice");

    let (status, updated) = send(
        &app,
        Method::PATCH,
        "/api/v1/accounts/profile",
        Some(&access),
        Some(json!({ "name": "Alice Smith" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Alice Smith");

    let (status, me) = send(&app, Method::GET, "/api/v1/auth/me", Some(&access), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "alice@example.com");
    assert_eq!(me["name"], "Alice Smith");

    let (status, rotated) = send(
        &app,
        Method::POST,
        "/api/v1/auth/refresh",
        None,
        Some(json!({ "refreshToken": refresh })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let new_access = rotated["accessToken"].as_str().unwrap();
    let new_refresh = rotated["refreshToken"].as_str().unwrap();
    assert_ne!(new_access, access);
    assert_ne!(new_refresh, refresh);

    let (status, me) = send(&app, Method::GET, "/api/v1/auth/me", Some(new_access), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], id.as_str());
}

#[tokio::test]
async fn test_register_without_name() {
    let app = test_app();

    let (status, body) = register(&app, "bob@example.com", "secret123", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["name"].is_null());
}

#[tokio::test]
async fn test_register_duplicate_email_is_rejected() {
    let app = test_app();
    register(&app, "alice@example.com", "secret123", Some("Alice")).await;

    let (status, body) = register(&app, "alice@example.com", "different1", Some("Other")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "ALREADY_EXISTS");

    // The first registration keeps its password.
    let (status, _) = login(&app, "alice@example.com", "secret123").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = login(&app, "alice@example.com", "different1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_email_match_is_case_sensitive() {
    let app = test_app();
    register(&app, "alice@example.com", "secret123", None).await;

    let (status, _) = register(&app, "Alice@example.com", "secret123", None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = login(&app, "ALICE@example.com", "secret123").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let app = test_app();

    let (status, body) = register(&app, "not-an-email", "secret123", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "BAD_REQUEST");

    let (status, body) = register(&app, "carol@example.com", "short", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "BAD_REQUEST");
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = test_app();
    register(&app, "alice@example.com", "secret123", None).await;

    let (status, body) = login(&app, "alice@example.com", "wrong-password").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_unknown_email_looks_like_wrong_password() {
    let app = test_app();
    register(&app, "alice@example.com", "secret123", None).await;

    let (unknown_status, unknown) = login(&app, "nobody@example.com", "secret123").await;
    let (wrong_status, wrong) = login(&app, "alice@example.com", "wrong-password").await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, wrong_status);
    assert_eq!(unknown, wrong);
}

#[tokio::test]
async fn test_long_password_only_first_72_bytes_count() {
    let app = test_app();
    let base = "p".repeat(72);
    let original = format!("{}-registered", base);
    let variant = format!("{}-typed-differently", base);

    let (status, _) = register(&app, "long@example.com", &original, None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = login(&app, "long@example.com", &variant).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_me_without_token() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/auth/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/api/v1/auth/me", Some("not.a.jwt"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let app = test_app();
    let (_, refresh) = signed_in(&app, "alice@example.com", "secret123").await;

    let (status, _) = send(&app, Method::GET, "/api/v1/auth/me", Some(&refresh), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/v1/accounts/profile", Some(&refresh), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_access_token_cannot_refresh() {
    let app = test_app();
    let (access, _) = signed_in(&app, "alice@example.com", "secret123").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/refresh",
        None,
        Some(json!({ "refreshToken": access })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_refresh_without_token() {
    let app = test_app();

    let (status, _) = send(&app, Method::POST, "/api/v1/auth/refresh", None, Some(json!({}))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_foreign_secret() {
    let app = test_app();
    signed_in(&app, "alice@example.com", "secret123").await;

    let foreign = TokenService::new(
        b"some-other-secret-that-is-long-enough!!",
        Duration::minutes(15),
        Duration::days(7),
    );
    let pair = foreign.issue_pair(Uuid::new_v4()).unwrap();

    let (status, _) = send(&app, Method::GET, "/api/v1/auth/me", Some(&pair.access_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/refresh",
        None,
        Some(json!({ "refreshToken": pair.refresh_token })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unknown_subject() {
    let app = test_app();
    let tokens = TokenService::new(
        common::TEST_SECRET.as_bytes(),
        Duration::minutes(15),
        Duration::days(7),
    );
    let pair = tokens.issue_pair(Uuid::new_v4()).unwrap();

    let (status, _) = send(&app, Method::GET, "/api/v1/auth/me", Some(&pair.access_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/refresh",
        None,
        Some(json!({ "refreshToken": pair.refresh_token })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile_requires_name() {
    let app = test_app();
    let (access, _) = signed_in(&app, "alice@example.com", "secret123").await;

    for body in [json!({}), json!({ "name": "" }), json!({ "name": "   " })] {
        let (status, response) = send(
            &app,
            Method::PATCH,
            "/api/v1/accounts/profile",
            Some(&access),
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&response), "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_update_profile_requires_token() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/v1/accounts/profile",
        None,
        Some(json!({ "name": "Mallory" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_profile() {
    let app = test_app();
    let (status, _) = register(&app, "dana@example.com", "secret123", Some("Dana")).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, tokens) = login(&app, "dana@example.com", "secret123").await;
    let access = tokens["accessToken"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, "/api/v1/accounts/profile", Some(access), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "dana@example.com");
    assert_eq!(body["name"], "Dana");
}
