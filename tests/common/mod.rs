#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use tempfile::TempDir;
use url_alias::domain::repositories::UrlRepository;
use url_alias::error::StorageError;
use url_alias::infrastructure::persistence::{
    InMemoryUrlRepository, SqliteOptions, SqliteUrlRepository,
};
use url_alias::state::AppState;

/// Opens a fresh SQLite store in a temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep it
/// alive for the duration of the test.
pub async fn create_sqlite_repository() -> (TempDir, SqliteUrlRepository) {
    let dir = TempDir::new().unwrap();
    let repo = SqliteUrlRepository::connect(&sqlite_options(&dir))
        .await
        .unwrap();
    (dir, repo)
}

pub fn sqlite_options(dir: &TempDir) -> SqliteOptions {
    let path = dir.path().join("storage.db");
    SqliteOptions::new(path.to_str().unwrap())
}

pub fn create_memory_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let state = AppState::from_repository(repo.clone(), 6);
    (state, repo)
}

pub async fn create_sqlite_state() -> (TempDir, AppState) {
    let (dir, repo) = create_sqlite_repository().await;
    let state = AppState::from_repository(Arc::new(repo), 6);
    (dir, state)
}

/// Store whose every operation fails, for exercising server-fault paths.
pub struct BrokenRepository;

#[async_trait]
impl UrlRepository for BrokenRepository {
    async fn save(&self, _url: &str, _alias: &str) -> Result<i64, StorageError> {
        Err(StorageError::failure("storage.broken.save", "database is locked"))
    }

    async fn resolve(&self, _alias: &str) -> Result<String, StorageError> {
        Err(StorageError::failure(
            "storage.broken.resolve",
            "database is locked",
        ))
    }

    async fn delete(&self, _alias: &str) -> Result<(), StorageError> {
        Err(StorageError::failure("storage.broken.delete", "database is locked"))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Err(StorageError::failure("storage.broken.ping", "database is locked"))
    }
}

pub fn create_broken_state() -> AppState {
    AppState::from_repository(Arc::new(BrokenRepository), 6)
}

/// Fires `attempts` concurrent saves of different URLs under one alias and
/// returns `(successes, conflicts)`. Any other outcome fails the test.
pub async fn race_same_alias(
    repo: Arc<dyn UrlRepository>,
    alias: &str,
    attempts: usize,
) -> (usize, usize) {
    let mut handles = Vec::with_capacity(attempts);

    for i in 0..attempts {
        let repo = repo.clone();
        let alias = alias.to_string();
        handles.push(tokio::spawn(async move {
            repo.save(&format!("https://example.com/{}", i), &alias)
                .await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;

    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(StorageError::AliasAlreadyExists { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected storage error: {:?}", e),
        }
    }

    (successes, conflicts)
}
