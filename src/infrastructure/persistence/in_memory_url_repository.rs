//! In-memory implementation of the URL store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::StorageError;

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    mappings: HashMap<String, UrlMapping>,
}

/// Store that keeps mappings in process memory.
///
/// Contents are lost on restart. The check-and-insert in
/// [`save`](UrlRepository::save) runs under a single lock, which gives the
/// same uniqueness guarantee as a database constraint.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    state: Mutex<State>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    ///
    /// Reads through a poisoned lock; the map is never left half-updated.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .mappings
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self, op: &'static str) -> Result<MutexGuard<'_, State>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::failure(op, e.to_string()))
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "storage.memory.save";

        if alias.is_empty() {
            return Err(StorageError::failure(OP, "alias must not be empty"));
        }

        let mut state = self.lock(OP)?;

        if state.mappings.contains_key(alias) {
            return Err(StorageError::AliasAlreadyExists {
                alias: alias.to_owned(),
            });
        }

        state.last_id += 1;
        let id = state.last_id;
        state.mappings.insert(
            alias.to_owned(),
            UrlMapping::new(id, alias.to_owned(), url.to_owned()),
        );

        Ok(id)
    }

    async fn resolve(&self, alias: &str) -> Result<String, StorageError> {
        let state = self.lock("storage.memory.resolve")?;

        state
            .mappings
            .get(alias)
            .map(|m| m.url.clone())
            .ok_or_else(|| StorageError::NotFound {
                alias: alias.to_owned(),
            })
    }

    async fn delete(&self, alias: &str) -> Result<(), StorageError> {
        let mut state = self.lock("storage.memory.delete")?;

        match state.mappings.remove(alias) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound {
                alias: alias.to_owned(),
            }),
        }
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.lock("storage.memory.ping").map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_increase_monotonically() {
        let repo = InMemoryUrlRepository::new();

        let first = repo.save("https://a.com", "a").await.unwrap();
        let second = repo.save("https://b.com", "b").await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUrlRepository::new();

        let first = repo.save("https://a.com", "a").await.unwrap();
        repo.delete("a").await.unwrap();
        let second = repo.save("https://a.com", "a").await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_empty_alias_is_storage_failure() {
        let repo = InMemoryUrlRepository::new();

        let result = repo.save("https://a.com", "").await;

        assert!(matches!(result, Err(StorageError::Failure { .. })));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_alias_keeps_original_url() {
        let repo = InMemoryUrlRepository::new();
        repo.save("https://google.com", "google").await.unwrap();

        let result = repo.save("https://example.com", "google").await;

        assert!(matches!(
            result,
            Err(StorageError::AliasAlreadyExists { ref alias }) if alias == "google"
        ));
        assert_eq!(repo.resolve("google").await.unwrap(), "https://google.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_same_url_under_two_aliases() {
        let repo = InMemoryUrlRepository::new();

        repo.save("https://google.com", "g1").await.unwrap();
        repo.save("https://google.com", "g2").await.unwrap();

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_unknown_alias() {
        let repo = InMemoryUrlRepository::new();

        let result = repo.delete("nope").await;

        assert!(matches!(result, Err(StorageError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_poisoned_lock() {
        let repo = std::sync::Arc::new(InMemoryUrlRepository::new());
        repo.save("https://a.com", "a").await.unwrap();

        let poisoner = repo.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(repo.state.is_poisoned());
        assert_eq!(repo.len(), 1);
        assert!(matches!(
            repo.resolve("a").await,
            Err(StorageError::Failure { .. })
        ));
    }
}
