//! # URL Alias
//!
//! Maps long URLs to short aliases and resolves aliases back to URLs.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`UrlMapping`](domain::entities::UrlMapping)
//!   entity and the [`UrlRepository`](domain::repositories::UrlRepository) store trait
//! - **Application Layer** ([`application`]) - The save-mapping use case
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Guarantees
//!
//! - An alias maps to at most one URL; saving over a taken alias is a conflict,
//!   never an overwrite
//! - Uniqueness is enforced atomically by the store, so concurrent saves on one
//!   alias produce exactly one success
//! - A missing alias gets a random 6-character alias from `[A-Za-z0-9]`; a
//!   colliding generated alias is reported as a conflict, not retried
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! cargo run
//!
//! curl -X POST localhost:8082/url -d '{"url":"https://google.com","alias":"google"}' \
//!      -H 'content-type: application/json'
//! curl -i localhost:8082/google
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::{AppError, SaveError, StorageError};
    pub use crate::infrastructure::persistence::{
        InMemoryUrlRepository, SqliteOptions, SqliteUrlRepository,
    };
    pub use crate::state::AppState;
}
