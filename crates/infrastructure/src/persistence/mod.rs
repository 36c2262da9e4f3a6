//! Persistence module
//!
//! Read-only SQLite access to the climate dataset.

pub mod climate_store;
pub mod connection;
pub mod database_health;
pub mod error;

pub use climate_store::SqliteClimateStore;
pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use database_health::SqliteDatabaseHealth;
