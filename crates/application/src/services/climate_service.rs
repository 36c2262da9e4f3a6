//! Climate service - the reporting use cases
//!
//! Each report fixes its own filter (reference window, station, date range)
//! and hands exactly one query to the dataset port.

use std::{fmt, sync::Arc};

use domain::{
    DateRange, PrecipitationReading, Station, StationCode, TemperatureObservation,
    TemperatureSummary, lookback_start,
};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ClimateDataPort};

/// Service answering the climate reports
pub struct ClimateService {
    data: Arc<dyn ClimateDataPort>,
    tobs_station: StationCode,
}

impl fmt::Debug for ClimateService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClimateService")
            .field("tobs_station", &self.tobs_station)
            .finish_non_exhaustive()
    }
}

impl ClimateService {
    /// Create a new climate service reporting temperatures of the most active station
    pub fn new(data: Arc<dyn ClimateDataPort>) -> Self {
        Self {
            data,
            tobs_station: StationCode::most_active(),
        }
    }

    /// Station whose observations the temperature report lists
    pub const fn tobs_station(&self) -> &StationCode {
        &self.tobs_station
    }

    /// Precipitation for the year before the reference date
    #[instrument(skip(self))]
    pub async fn last_year_precipitation(
        &self,
    ) -> Result<Vec<PrecipitationReading>, ApplicationError> {
        let since = lookback_start();
        let readings = self.data.precipitation_since(&since).await?;
        debug!(since = %since, rows = readings.len(), "Precipitation report built");
        Ok(readings)
    }

    /// Every station in the dataset
    #[instrument(skip(self))]
    pub async fn stations(&self) -> Result<Vec<Station>, ApplicationError> {
        let stations = self.data.list_stations().await?;
        debug!(rows = stations.len(), "Station report built");
        Ok(stations)
    }

    /// Temperature observations of the most active station for the year
    /// before the reference date
    #[instrument(skip(self), fields(station = %self.tobs_station))]
    pub async fn last_year_temperatures(
        &self,
    ) -> Result<Vec<TemperatureObservation>, ApplicationError> {
        let since = lookback_start();
        let observations = self
            .data
            .temperature_observations_since(&self.tobs_station, &since)
            .await?;
        debug!(since = %since, rows = observations.len(), "Temperature report built");
        Ok(observations)
    }

    /// MIN/MAX/AVG temperature over the range
    ///
    /// An inverted or malformed range is passed through unchanged; it
    /// matches nothing and yields an empty summary.
    #[instrument(skip(self), fields(range = %range))]
    pub async fn temperature_summary(
        &self,
        range: &DateRange,
    ) -> Result<TemperatureSummary, ApplicationError> {
        let summary = self.data.temperature_summary(range).await?;
        debug!(empty = summary.is_empty(), "Temperature summary built");
        Ok(summary)
    }
}
