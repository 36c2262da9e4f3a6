//! Row-listing report handlers
//!
//! Precipitation and temperature observations for the year before the
//! reference date, and the full station list.

use axum::{Json, extract::State};
use domain::{PrecipitationReading, Station, TemperatureObservation};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// One precipitation row, serialized as `{"<date>": <prcp>}`
///
/// Rows sharing a date stay separate objects; they are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationEntry {
    pub date: String,
    pub prcp: Option<f64>,
}

impl Serialize for PrecipitationEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.prcp)?;
        map.end()
    }
}

impl From<PrecipitationReading> for PrecipitationEntry {
    fn from(reading: PrecipitationReading) -> Self {
        Self {
            date: reading.date,
            prcp: reading.prcp,
        }
    }
}

/// Station in responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            station: station.station,
            name: station.name,
            latitude: station.latitude,
            longitude: station.longitude,
            elevation: station.elevation,
        }
    }
}

/// Temperature observation in responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TobsResponse {
    pub date: String,
    pub tobs: f64,
}

impl From<TemperatureObservation> for TobsResponse {
    fn from(obs: TemperatureObservation) -> Self {
        Self {
            date: obs.date,
            tobs: obs.tobs,
        }
    }
}

/// Precipitation for the last year of data
///
/// GET /api/v1.0/precipitation
#[instrument(skip(state))]
pub async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<PrecipitationEntry>>, ApiError> {
    let readings = state
        .climate_service
        .last_year_precipitation()
        .await
        .inspect_err(|e| warn!(error = %e, "Failed to load precipitation"))?;

    info!(rows = readings.len(), "Serving precipitation");
    Ok(Json(readings.into_iter().map(Into::into).collect()))
}

/// All stations
///
/// GET /api/v1.0/stations
#[instrument(skip(state))]
pub async fn stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationResponse>>, ApiError> {
    let stations = state
        .climate_service
        .stations()
        .await
        .inspect_err(|e| warn!(error = %e, "Failed to load stations"))?;

    info!(rows = stations.len(), "Serving stations");
    Ok(Json(stations.into_iter().map(Into::into).collect()))
}

/// Temperature observations of the most active station for the last year of data
///
/// GET /api/v1.0/tobs
#[instrument(skip(state))]
pub async fn tobs(State(state): State<AppState>) -> Result<Json<Vec<TobsResponse>>, ApiError> {
    let observations = state
        .climate_service
        .last_year_temperatures()
        .await
        .inspect_err(|e| warn!(error = %e, "Failed to load temperature observations"))?;

    info!(rows = observations.len(), "Serving temperature observations");
    Ok(Json(observations.into_iter().map(Into::into).collect()))
}
