//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Station code is empty or contains characters outside `[A-Za-z0-9]`
    #[error("Invalid station code: {0}")]
    InvalidStationCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_station_code_message() {
        let err = DomainError::InvalidStationCode("US C".to_string());
        assert_eq!(err.to_string(), "Invalid station code: US C");
    }

    #[test]
    fn error_has_debug() {
        let err = DomainError::InvalidStationCode(String::new());
        assert!(format!("{err:?}").contains("InvalidStationCode"));
    }
}
