//! HTTP API layer for request/response handling.
//!
//! This layer decodes and validates requests, calls the URL service, and maps
//! its outcomes to status codes.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request ids and tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
