//! Testing utilities for persistence and HTTP integration tests.
//!
//! Builds throwaway on-disk copies of the climate dataset so tests run
//! against the same read-only pool the server uses.
//!
//! # Example
//!
//! ```ignore
//! use infrastructure::testing::SeededDataset;
//!
//! let dataset = SeededDataset::sample()?;
//! let pool = infrastructure::create_pool(&dataset.config())?;
//! // The file is removed when `dataset` is dropped
//! ```

mod fixtures;

pub use fixtures::SeededDataset;
