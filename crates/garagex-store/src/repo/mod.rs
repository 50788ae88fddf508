//! Repository layer for persisting garages and parking spots to SQLite

pub mod rows;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
