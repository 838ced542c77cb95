//! SQLite implementation of the URL store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::time::Duration;

use crate::domain::repositories::UrlRepository;
use crate::error::StorageError;
use crate::utils::db_error::is_unique_violation;

/// Connection settings for [`SqliteUrlRepository`].
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    /// Path to the database file. Created, with missing parent directories, if absent.
    pub path: String,
    pub max_connections: u32,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl SqliteOptions {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// SQLite-backed store.
///
/// Alias uniqueness is enforced by the `UNIQUE` constraint on `url.alias`, so
/// racing inserts are serialized by the engine and the loser gets
/// [`StorageError::AliasAlreadyExists`].
#[derive(Debug, Clone)]
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Opens the database file and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Failure`] if the file cannot be opened or the
    /// schema cannot be created.
    pub async fn connect(options: &SqliteOptions) -> Result<Self, StorageError> {
        const OP: &str = "storage.sqlite.connect";

        if let Some(parent) = Path::new(&options.path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::failure(OP, e))?;
        }

        let connect_options = SqliteConnectOptions::new()
            .filename(&options.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(options.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .connect_with(connect_options)
            .await
            .map_err(|e| StorageError::failure(OP, e))?;

        let repository = Self::from_pool(pool);
        repository.init().await?;

        tracing::debug!(path = %options.path, "sqlite storage ready");

        Ok(repository)
    }

    /// Wraps an existing pool without touching the schema.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations.
    ///
    /// Safe to call on an already initialized database.
    pub async fn init(&self) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.init";

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::failure(OP, e))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "storage.sqlite.save";

        match sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(&self.pool)
            .await
        {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => Err(StorageError::AliasAlreadyExists {
                alias: alias.to_owned(),
            }),
            Err(e) => {
                tracing::error!(op = OP, alias, url, error = %e, "failed to insert mapping");
                Err(StorageError::failure(OP, e))
            }
        }
    }

    async fn resolve(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.sqlite.resolve";

        let url = sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(op = OP, alias, error = %e, "failed to query mapping");
                StorageError::failure(OP, e)
            })?;

        url.ok_or_else(|| StorageError::NotFound {
            alias: alias.to_owned(),
        })
    }

    async fn delete(&self, alias: &str) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.delete";

        let done = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(op = OP, alias, error = %e, "failed to delete mapping");
                StorageError::failure(OP, e)
            })?;

        if done.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                alias: alias.to_owned(),
            });
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.ping";

        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(op = OP, error = %e, "failed to ping storage");
                StorageError::failure(OP, e)
            })
    }
}
