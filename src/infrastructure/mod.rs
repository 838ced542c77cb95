//! Infrastructure layer for external integrations.
//!
//! This layer implements the store trait defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite and in-memory store implementations

pub mod persistence;
