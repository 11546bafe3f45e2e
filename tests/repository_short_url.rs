//! PostgreSQL repository tests. Run with `DATABASE_URL` set and `--ignored`.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use url_shortener_core::AppError;
use url_shortener_core::domain::entities::{NewShortUrl, ShortUrlFilter};
use url_shortener_core::domain::repositories::ShortUrlRepository;
use url_shortener_core::infrastructure::persistence::PgShortUrlRepository;

fn new_url(code: &str, domain: &str) -> NewShortUrl {
    NewShortUrl {
        code: code.to_string(),
        full_url: format!("http://{domain}"),
        domain: domain.to_string(),
        expires_at: None,
    }
}

async fn seeded(pool: PgPool) -> PgShortUrlRepository {
    let repo = PgShortUrlRepository::new(Arc::new(pool));
    repo.create(new_url("123", "example.com")).await.unwrap();
    repo.create(new_url("456", "testdomain.com")).await.unwrap();
    repo.create(new_url("789", "myawesome-site.com"))
        .await
        .unwrap();
    repo
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_short_url(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let created = repo.create(new_url("abc", "example.com")).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.code, "abc");
    assert_eq!(created.hit_count, 0);
    assert!(created.expires_at.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_duplicate_code(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));
    repo.create(new_url("456", "example1.com")).await.unwrap();

    let result = repo.create(new_url("456", "example2.com")).await;

    assert!(matches!(result, Err(AppError::UniqueViolation)));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_code(pool: PgPool) {
    let repo = seeded(pool).await;

    let found = repo.find_by_code("456").await.unwrap();
    assert_eq!(found.domain, "testdomain.com");

    assert!(matches!(
        repo.find_by_code("321").await,
        Err(AppError::RecordNotFound)
    ));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_expiry(pool: PgPool) {
    let repo = seeded(pool).await;
    let mut record = repo.find_by_code("123").await.unwrap();
    record.expires_at = Some(Utc::now() - Duration::hours(1));

    repo.update(&record).await.unwrap();

    let updated = repo.find_by_code("123").await.unwrap();
    assert!(updated.is_expired());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_without_identity(pool: PgPool) {
    let repo = seeded(pool).await;
    let mut record = repo.find_by_code("123").await.unwrap();
    record.id = 0;

    assert!(matches!(
        repo.update(&record).await,
        Err(AppError::RecordNotFound)
    ));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_increase_hit_count(pool: PgPool) {
    let repo = seeded(pool).await;

    repo.increase_hit_count("123", 1).await.unwrap();
    repo.increase_hit_count("123", 2).await.unwrap();

    assert_eq!(repo.find_by_code("123").await.unwrap().hit_count, 3);
    assert!(matches!(
        repo.increase_hit_count("000", 1).await,
        Err(AppError::RecordNotFound)
    ));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_pagination_and_filters(pool: PgPool) {
    let repo = seeded(pool).await;

    let (page, total) = repo.list(0, 10, None).await.unwrap();
    let codes: Vec<_> = page.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["123", "456", "789"]);
    assert_eq!(total, 3);

    let (page, total) = repo.list(1, 1, None).await.unwrap();
    assert_eq!(page[0].code, "456");
    assert_eq!(total, 3);

    let by_keyword = ShortUrlFilter {
        code: None,
        keyword: Some("awesome".to_string()),
    };
    let (page, total) = repo.list(0, 30, Some(by_keyword)).await.unwrap();
    assert_eq!(page[0].code, "789");
    assert_eq!(total, 1);

    let both = ShortUrlFilter {
        code: Some("123".to_string()),
        keyword: Some("awesome".to_string()),
    };
    let (page, total) = repo.list(0, 30, Some(both)).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(total, 0);
}
