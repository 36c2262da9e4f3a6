//! Station code value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Code of the station with the most observations in the Hawaii dataset
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// An external station key, e.g. `USC00519281`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationCode {
    value: String,
}

impl StationCode {
    /// Create a new station code
    ///
    /// Codes are non-empty and ASCII alphanumeric.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let value = code.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::InvalidStationCode(
                "Station code must not be empty".to_string(),
            ));
        }

        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidStationCode(value));
        }

        Ok(Self { value })
    }

    /// The station reported on by the temperature observation route
    #[must_use]
    pub fn most_active() -> Self {
        Self {
            value: MOST_ACTIVE_STATION.to_string(),
        }
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for StationCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StationCode {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StationCode> for String {
    fn from(code: StationCode) -> Self {
        code.value
    }
}

impl AsRef<str> for StationCode {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
