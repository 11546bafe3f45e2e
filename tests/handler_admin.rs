mod common;

use axum::http::StatusCode;
use url_shortener_core::domain::repositories::ShortUrlRepository;

async fn seeded() -> common::TestApp {
    let app = common::create_test_app();
    common::create_test_url(&app.repo, "123", "http://example.com/a").await;
    common::create_test_url(&app.repo, "456", "http://testdomain.com/b").await;
    common::create_test_url(&app.repo, "789", "http://myawesome-site.com/c").await;
    app
}

fn codes(body: &serde_json::Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["code"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_requires_token() {
    let app = seeded().await;

    let response = app.server.get("/admin/shortUrls").await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "forbidden");
}

#[tokio::test]
async fn test_list_rejects_wrong_token() {
    let app = seeded().await;

    app.server
        .get("/admin/shortUrls")
        .add_header("Authorization", "Bearer wrong")
        .await
        .assert_status(StatusCode::FORBIDDEN);

    app.server
        .get("/admin/shortUrls")
        .add_query_param("token", "wrong")
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_with_bearer_token() {
    let app = seeded().await;

    let response = app
        .server
        .get("/admin/shortUrls")
        .add_header("Authorization", common::bearer())
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(codes(&body), vec!["123", "456", "789"]);
    assert_eq!(body["totalCount"], 3);

    let first = &body["data"][0];
    assert_eq!(first["fullUrl"], "http://example.com/a");
    assert_eq!(first["hitCount"], 0);
    assert!(first.get("expiresAt").is_none());
    assert!(first.get("id").is_none());
    assert!(first.get("domain").is_none());
}

#[tokio::test]
async fn test_query_token_takes_precedence() {
    let app = seeded().await;

    app.server
        .get("/admin/shortUrls")
        .add_query_param("token", common::ADMIN_TOKEN)
        .add_header("Authorization", "Bearer wrong")
        .await
        .assert_status_ok();

    app.server
        .get("/admin/shortUrls")
        .add_query_param("token", "wrong")
        .add_header("Authorization", common::bearer())
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_pagination() {
    let app = seeded().await;

    let response = app
        .server
        .get("/admin/shortUrls")
        .add_query_param("token", common::ADMIN_TOKEN)
        .add_query_param("offset", "1")
        .add_query_param("size", "1")
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(codes(&body), vec!["456"]);
    assert_eq!(body["totalCount"], 3);
}

#[tokio::test]
async fn test_list_filters() {
    let app = seeded().await;

    let response = app
        .server
        .get("/admin/shortUrls")
        .add_query_param("token", common::ADMIN_TOKEN)
        .add_query_param("keyword", "awesome")
        .await;
    let body = response.json::<serde_json::Value>();
    assert_eq!(codes(&body), vec!["789"]);
    assert_eq!(body["totalCount"], 1);

    let response = app
        .server
        .get("/admin/shortUrls")
        .add_query_param("token", common::ADMIN_TOKEN)
        .add_query_param("shortCode", "123")
        .add_query_param("keyword", "awesome")
        .await;
    let body = response.json::<serde_json::Value>();
    assert!(codes(&body).is_empty());
    assert_eq!(body["totalCount"], 0);
}

#[tokio::test]
async fn test_list_unparsable_numbers_use_defaults() {
    let app = seeded().await;

    let response = app
        .server
        .get("/admin/shortUrls")
        .add_query_param("token", common::ADMIN_TOKEN)
        .add_query_param("offset", "abc")
        .add_query_param("size", "abc")
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(codes(&body).len(), 3);
}

#[tokio::test]
async fn test_list_size_out_of_range() {
    let app = seeded().await;

    for size in ["0", "1001"] {
        let response = app
            .server
            .get("/admin/shortUrls")
            .add_query_param("token", common::ADMIN_TOKEN)
            .add_query_param("size", size)
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_delete_expires_short_url() {
    let app = seeded().await;

    app.server
        .get("/123")
        .await
        .assert_status(StatusCode::FOUND);

    app.server
        .delete("/admin/shortUrls/123")
        .add_header("Authorization", common::bearer())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .get("/123")
        .await
        .assert_status(StatusCode::GONE);

    let stored = app.repo.find_by_code("123").await.unwrap();
    assert!(stored.is_expired());
    assert_eq!(stored.hit_count, 1);
}

#[tokio::test]
async fn test_delete_not_found() {
    let app = seeded().await;

    let response = app
        .server
        .delete("/admin/shortUrls/nope")
        .add_header("Authorization", common::bearer())
        .await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_requires_token() {
    let app = seeded().await;

    app.server
        .delete("/admin/shortUrls/123")
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let stored = app.repo.find_by_code("123").await.unwrap();
    assert!(stored.expires_at.is_none());
}

#[tokio::test]
async fn test_keyword_matches_normalized_domain() {
    let app = common::create_test_app();
    app.server
        .post("/")
        .json(&serde_json::json!({ "url": "http://MyAwesome.com/page" }))
        .await
        .assert_status(StatusCode::CREATED);

    let lookup = |keyword: &'static str| {
        app.server
            .get("/admin/shortUrls")
            .add_query_param("token", common::ADMIN_TOKEN)
            .add_query_param("keyword", keyword)
    };

    let body = lookup("awesome").await.json::<serde_json::Value>();
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["data"][0]["fullUrl"], "http://MyAwesome.com/page");

    let body = lookup("Awesome").await.json::<serde_json::Value>();
    assert_eq!(body["totalCount"], 0);
}
