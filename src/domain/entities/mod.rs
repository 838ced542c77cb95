//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted alias to URL mapping

pub mod url_mapping;

pub use url_mapping::UrlMapping;
