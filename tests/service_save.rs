mod common;

use std::sync::Arc;
use url_alias::application::services::UrlService;
use url_alias::error::{SaveError, StorageError};

#[tokio::test]
async fn test_save_scenarios_against_sqlite() {
    let (_dir, repo) = common::create_sqlite_repository().await;
    let service = UrlService::new(Arc::new(repo), 6);

    // Caller-supplied alias
    let alias = service
        .save("https://google.com", Some("google"))
        .await
        .unwrap();
    assert_eq!(alias, "google");
    assert_eq!(
        service.resolve("google").await.unwrap(),
        "https://google.com"
    );

    // Taken alias, store unchanged
    let result = service.save("https://example.com", Some("google")).await;
    assert!(matches!(
        result,
        Err(SaveError::Conflict { ref alias }) if alias == "google"
    ));
    assert_eq!(
        service.resolve("google").await.unwrap(),
        "https://google.com"
    );

    // Empty alias means generate
    let generated = service.save("https://example.org", Some("")).await.unwrap();
    assert_eq!(generated.len(), 6);
    assert!(generated.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        service.resolve(&generated).await.unwrap(),
        "https://example.org"
    );

    // Unknown alias
    let result = service.resolve("doesnotexist").await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn test_generated_aliases_use_configured_length() {
    let (_dir, repo) = common::create_sqlite_repository().await;
    let service = UrlService::new(Arc::new(repo), 10);

    let alias = service.save("https://example.org", None).await.unwrap();

    assert_eq!(alias.len(), 10);
}

#[tokio::test]
async fn test_many_generated_aliases_resolve() {
    let (_dir, repo) = common::create_sqlite_repository().await;
    let service = UrlService::new(Arc::new(repo), 6);

    let mut saved = Vec::new();
    for i in 0..50 {
        let url = format!("https://example.org/{}", i);
        let alias = service.save(&url, None).await.unwrap();
        saved.push((alias, url));
    }

    for (alias, url) in saved {
        assert_eq!(service.resolve(&alias).await.unwrap(), url);
    }
}

#[tokio::test]
async fn test_storage_failure_is_reported_as_failed() {
    let service = UrlService::new(Arc::new(common::BrokenRepository), 6);

    let result = service.save("https://example.org", Some("alias")).await;

    assert!(matches!(result, Err(SaveError::Failed(_))));
}
