//! Infrastructure layer for external integrations.
//!
//! Implements the storage trait defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL storage implementation

pub mod persistence;
