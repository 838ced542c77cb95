//! Save, resolve, and delete orchestration for URL mappings.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::{SaveError, StorageError};
use crate::utils::alias_generator::generate_alias;

/// Service implementing the save-mapping use case.
///
/// Each call is a single pass with no retries: the alias is resolved (taken
/// from the caller or generated), the store is asked to persist it, and the
/// store's classification is passed back. A generated alias that collides is
/// reported as a conflict; callers retry the whole request.
pub struct UrlService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    alias_length: usize,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Creates a new URL service.
    ///
    /// `alias_length` is the length of generated aliases and must be positive.
    pub fn new(repository: Arc<R>, alias_length: usize) -> Self {
        Self {
            repository,
            alias_length,
        }
    }

    /// Stores `url` under `alias`, or under a generated alias when `alias` is
    /// `None` or empty. Returns the alias used.
    ///
    /// The URL is expected to be validated by the caller. Caller-supplied
    /// aliases are used verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Conflict`] if the alias is already taken.
    /// Returns [`SaveError::Failed`] if the store fails.
    pub async fn save(&self, url: &str, alias: Option<&str>) -> Result<String, SaveError> {
        let alias = match alias {
            Some(alias) if !alias.is_empty() => alias.to_owned(),
            _ => generate_alias(self.alias_length),
        };

        match self.repository.save(url, &alias).await {
            Ok(id) => {
                tracing::debug!(id, alias = %alias, "mapping persisted");
                Ok(alias)
            }
            Err(StorageError::AliasAlreadyExists { alias }) => Err(SaveError::Conflict { alias }),
            Err(e) => Err(SaveError::Failed(e)),
        }
    }

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists.
    /// Returns [`StorageError::Failure`] on store errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, StorageError> {
        self.repository.resolve(alias).await
    }

    /// Removes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists.
    /// Returns [`StorageError::Failure`] on store errors.
    pub async fn delete(&self, alias: &str) -> Result<(), StorageError> {
        self.repository.delete(alias).await
    }

    /// Checks that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.repository.ping().await
    }
}
