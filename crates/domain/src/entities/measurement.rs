//! Daily measurement record and the report rows projected from it

use serde::{Deserialize, Serialize};

/// A row of the `measurement` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Code of the reporting station
    pub station: String,
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation, absent on some days
    pub prcp: Option<f64>,
    /// Observed temperature
    pub tobs: f64,
}

impl Measurement {
    /// Table the records are read from
    pub const TABLE: &'static str = "measurement";

    /// Columns in projection order
    pub const COLUMNS: [&'static str; 4] = ["station", "date", "prcp", "tobs"];
}

/// `(date, prcp)` projection of a measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// `(date, tobs)` projection of a measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

/// MIN/MAX/AVG of `tobs` over a date range
///
/// All three are `None` when no measurement matched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

impl TemperatureSummary {
    /// Summary of an empty match
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: None,
            max: None,
            avg: None,
        }
    }

    /// Whether no measurement contributed to the summary
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.avg.is_none()
    }
}
