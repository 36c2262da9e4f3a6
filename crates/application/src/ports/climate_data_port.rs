//! Climate dataset port
//!
//! Read-only access to the `station` and `measurement` tables.

use async_trait::async_trait;
use domain::{
    DateRange, PrecipitationReading, Station, StationCode, TemperatureObservation,
    TemperatureSummary,
};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for querying the climate dataset
///
/// Every method runs exactly one query. Results keep the order the
/// dataset returns them in.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClimateDataPort: Send + Sync {
    /// All station rows
    async fn list_stations(&self) -> Result<Vec<Station>, ApplicationError>;

    /// `(date, prcp)` for every measurement with `date >= since`
    async fn precipitation_since(
        &self,
        since: &str,
    ) -> Result<Vec<PrecipitationReading>, ApplicationError>;

    /// `(date, tobs)` for the station's measurements with `date >= since`
    async fn temperature_observations_since(
        &self,
        station: &StationCode,
        since: &str,
    ) -> Result<Vec<TemperatureObservation>, ApplicationError>;

    /// MIN/MAX/AVG of `tobs` over measurements inside the range
    async fn temperature_summary(
        &self,
        range: &DateRange,
    ) -> Result<TemperatureSummary, ApplicationError>;
}
