//! # Depot Database Crate
//!
//! This crate is the application-specific interface to PostgreSQL. It hides
//! every SQL statement behind one narrow repository per resource, so the web
//! layer never sees the storage technology.
//!
//! ## Public API
//!
//! - `connect`: Builds the shared connection pool from `DatabaseSettings`.
//! - `ensure_schema`: Creates the `trains`, `planes` and `history` tables if missing.
//! - `ResourceRepository`: The list / insert / delete-by-id contract.
//! - `PgResourceRepository`, `MemoryRepository`: Its PostgreSQL and in-memory implementations.
//! - `Repositories`: The three repositories bundled for injection into the web server.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;
pub mod schema;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_options};
pub use error::DbError;
pub use memory::MemoryRepository;
pub use repository::{PgResourceRepository, Repositories, ResourceRepository};
pub use schema::{create_table_sql, ensure_schema};
