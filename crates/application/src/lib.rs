//! Application layer - Use cases and orchestration
//!
//! Defines the ports the reporting use cases need from storage and turns
//! each report into the query parameters handed to those ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
