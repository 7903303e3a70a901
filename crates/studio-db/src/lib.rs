//! Studio Database: SurrealDB connection management, schema migrations
//! and document-store implementations of the `studio-core` store traits.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Tenant-partitioned and application-partitioned stores
//!   ([`repository::SurrealPartitionedRepository`],
//!   [`repository::SurrealApplicationRepository`])
//! - Error types ([`DbError`])

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::run_migrations;
