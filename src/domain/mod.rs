//! Domain layer containing the persisted entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
