//! Store trait for alias to URL mappings.

use crate::error::StorageError;
use async_trait::async_trait;

/// Durable mapping from alias to URL with a uniqueness constraint on alias.
///
/// Uniqueness must be enforced atomically by the implementation: two concurrent
/// [`save`](UrlRepository::save) calls with the same alias produce exactly one
/// success and one [`StorageError::AliasAlreadyExists`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite file
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new mapping and returns its surrogate id.
    ///
    /// Never overwrites an existing mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasAlreadyExists`] if the alias is taken, whatever
    /// URL it points to.
    ///
    /// Returns [`StorageError::Failure`] for every other error, including
    /// aliases the backend rejects (an empty alias, for example).
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Looks up the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists.
    /// Returns [`StorageError::Failure`] on backend errors.
    async fn resolve(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists.
    /// Returns [`StorageError::Failure`] on backend errors.
    async fn delete(&self, alias: &str) -> Result<(), StorageError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
