mod support;

use axum::http::StatusCode;
use http::HeaderValue;
use serde_json::json;

use support::{access_token, spawn_app};

#[tokio::test]
async fn token_endpoint_issues_an_access_refresh_pair() {
    let app = spawn_app();
    let _ = access_token(&app, "alice", "wonderland").await;

    let response = app
        .server
        .post("/api/token/")
        .json(&json!({ "username": "alice", "password": "wonderland" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert!(body["access"].is_string());
    assert!(body["refresh"].is_string());
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let app = spawn_app();
    let _ = access_token(&app, "alice", "wonderland").await;

    let response = app
        .server
        .post("/api/token/")
        .json(&json!({ "username": "alice", "password": "nope" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/api/token/")
        .json(&json!({ "username": "nobody", "password": "nope" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_issues_a_working_access_token() {
    let app = spawn_app();
    let _ = access_token(&app, "alice", "wonderland").await;

    let response = app
        .server
        .post("/api/token/")
        .json(&json!({ "username": "alice", "password": "wonderland" }))
        .await;
    let refresh = response.json::<serde_json::Value>()["refresh"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .server
        .post("/api/token/refresh/")
        .json(&json!({ "refresh": refresh }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let access = response.json::<serde_json::Value>()["access"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .server
        .get("/api/items/")
        .add_header(
            http::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {access}")).unwrap(),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn access_token_is_rejected_by_the_refresh_endpoint() {
    let app = spawn_app();
    let access = access_token(&app, "alice", "wonderland").await;

    let response = app
        .server
        .post("/api/token/refresh/")
        .json(&json!({ "refresh": access }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/api/token/refresh/")
        .json(&json!({ "refresh": "garbage" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
