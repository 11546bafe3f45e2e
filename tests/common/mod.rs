#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{Duration, Utc};
use std::sync::Arc;
use url_shortener_core::domain::entities::NewShortUrl;
use url_shortener_core::domain::repositories::ShortUrlRepository;
use url_shortener_core::infrastructure::persistence::MemoryShortUrlRepository;
use url_shortener_core::routes::router;
use url_shortener_core::server::build_shortener;
use url_shortener_core::state::AppState;

pub const SERVER_HOST: &str = "http://localhost:8080";
pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const BLACKLIST: [&str; 2] = [r"sample.com", r"example\.(.+)\/block*"];

pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<MemoryShortUrlRepository>,
}

/// Full router over the in-memory backend, with cache and blacklist enabled.
pub fn create_test_app() -> TestApp {
    let repo = Arc::new(MemoryShortUrlRepository::new());
    let blacklist: Vec<String> = BLACKLIST.iter().map(|p| p.to_string()).collect();
    let shortener = build_shortener(repo.clone(), true, &blacklist).unwrap();

    let state = AppState::new(shortener, SERVER_HOST, ADMIN_TOKEN);
    let server = TestServer::new(router(state)).unwrap();

    TestApp { server, repo }
}

pub fn bearer() -> String {
    format!("Bearer {ADMIN_TOKEN}")
}

pub async fn create_test_url(repo: &MemoryShortUrlRepository, code: &str, url: &str) {
    repo.create(NewShortUrl {
        code: code.to_string(),
        full_url: url.to_string(),
        domain: url::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default(),
        expires_at: None,
    })
    .await
    .unwrap();
}

pub async fn create_expired_url(repo: &MemoryShortUrlRepository, code: &str, url: &str) {
    repo.create(NewShortUrl {
        code: code.to_string(),
        full_url: url.to_string(),
        domain: "example.com".to_string(),
        expires_at: Some(Utc::now() - Duration::hours(1)),
    })
    .await
    .unwrap();
}
