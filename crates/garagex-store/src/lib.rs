//! Garagex Store - SQLite persistence for garages and parking spots
//!
//! Provides:
//! - Connection helpers (`db`) that enable foreign keys on every connection
//! - Embedded, checksummed schema migrations and a test-only schema reset
//! - `SqliteRepo`, the typed row layer over the `garages` and
//!   `parking_spots` tables
//!
//! Transactions are owned by callers: every repository function takes a
//! `&Connection`, so it runs equally on a plain connection or inside a
//! `rusqlite::Transaction`.

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
