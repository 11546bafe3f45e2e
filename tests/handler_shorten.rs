mod common;

use axum::http::StatusCode;
use serde_json::json;
use url_shortener_core::domain::repositories::ShortUrlRepository;

fn code_of(short_url: &str) -> &str {
    short_url
        .strip_prefix(&format!("{}/", common::SERVER_HOST))
        .unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    let short_url = body["url"].as_str().unwrap();
    let code = code_of(short_url);
    assert_eq!(code.len(), 16);

    let stored = app.repo.find_by_code(code).await.unwrap();
    assert_eq!(stored.full_url, "https://example.com/page");
    assert_eq!(stored.domain, "example.com");
    assert!(stored.expires_at.is_none());
}

#[tokio::test]
async fn test_shorten_with_expiry() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "url": "https://example.com", "expiresIn": 3600 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    let code = code_of(body["url"].as_str().unwrap()).to_string();

    let stored = app.repo.find_by_code(&code).await.unwrap();
    assert!(stored.expires_at.is_some());
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "url": "https://example.com/target" }))
        .await;
    let body = response.json::<serde_json::Value>();
    let code = code_of(body["url"].as_str().unwrap()).to_string();

    let response = app.server.get(&format!("/{code}")).await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_shorten_negative_expiry() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "url": "not a url", "expiresIn": -1 }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "invalid_expires_in");
}

#[tokio::test]
async fn test_shorten_out_of_range_expiry() {
    let app = common::create_test_app();

    for expires_in in [i64::MAX, 10_000_000_000_000] {
        let response = app
            .server
            .post("/")
            .json(&json!({ "url": "https://example.com", "expiresIn": expires_in }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "invalid_expires_in");
    }

    let (_, total) = app.repo.list(0, 10, None).await.unwrap();
    assert_eq!(total, 0);

    app.server
        .get("/health")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let app = common::create_test_app();

    for url in ["", "example.com", "not a url"] {
        let response = app.server.post("/").json(&json!({ "url": url })).await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "invalid_url", "url: {url:?}");
    }
}

#[tokio::test]
async fn test_shorten_blacklisted_url() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "url": "http://sample.com/123" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "blocked_url");

    let (_, total) = app.repo.list(0, 10, None).await.unwrap();
    assert_eq!(total, 0);
}
