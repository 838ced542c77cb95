//! Store implementations.
//!
//! # Stores
//!
//! - [`SqliteUrlRepository`] - durable storage in a SQLite file, schema managed by
//!   embedded SQLx migrations
//! - [`InMemoryUrlRepository`] - process-local map for tests and throwaway runs

pub mod in_memory_url_repository;
pub mod sqlite_url_repository;

pub use in_memory_url_repository::InMemoryUrlRepository;
pub use sqlite_url_repository::{SqliteOptions, SqliteUrlRepository};
