//! HTTP layer translating requests into storage calls.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization and validation
//! - [`extract`] - Request-scoped context (request id)
//! - [`handlers`] - Save, redirect, remove and health handlers
//! - [`middleware`] - Authentication, request id and tracing layers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
