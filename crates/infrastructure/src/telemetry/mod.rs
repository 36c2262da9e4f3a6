//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber, as human-readable text or JSON.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging};
