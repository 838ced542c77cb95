//! Application layer services implementing the use cases.
//!
//! Services consume the store trait and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Save, resolve, and delete mappings

pub mod services;
