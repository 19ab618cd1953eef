//! # catalog-database
//!
//! PostgreSQL connection management, the [`ProductRepository`] storage
//! contract, and its PostgreSQL and in-memory implementations.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{InMemoryProductRepository, PgProductRepository, ProductRepository};
