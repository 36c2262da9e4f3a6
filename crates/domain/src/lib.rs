//! Domain layer for SurfsUp
//!
//! Contains the read-only climate records, report rows, value objects,
//! and domain errors. This layer knows nothing about storage or HTTP.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
