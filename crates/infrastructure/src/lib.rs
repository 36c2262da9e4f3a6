//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the SQLite climate dataset
//! and provides configuration loading and logging setup.

pub mod config;
pub mod persistence;
pub mod telemetry;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use config::{AppConfig, DatabaseConfig, Environment, ServerConfig};
pub use persistence::{
    ConnectionPool, DatabaseError, SqliteClimateStore, SqliteDatabaseHealth, create_pool,
};
pub use telemetry::{LogFormat, LoggingConfig, init_logging};
