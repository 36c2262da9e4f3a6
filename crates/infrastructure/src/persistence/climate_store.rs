//! SQLite climate store implementation
//!
//! Implements the ClimateDataPort over the `station` and `measurement` tables.

use std::sync::Arc;

use application::{error::ApplicationError, ports::ClimateDataPort};
use async_trait::async_trait;
use domain::{
    DateRange, Measurement, PrecipitationReading, Station, StationCode, TemperatureObservation,
    TemperatureSummary,
};
use rusqlite::{Connection, Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::{
    connection::{ConnectionPool, DatabaseError},
    error::map_database_error,
};

/// SQLite-based climate dataset store
#[derive(Clone)]
pub struct SqliteClimateStore {
    pool: Arc<ConnectionPool>,
}

impl std::fmt::Debug for SqliteClimateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteClimateStore")
            .field("pool", &"<ConnectionPool>")
            .finish()
    }
}

impl SqliteClimateStore {
    /// Create a new SQLite climate store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Run one query on a pooled connection off the async runtime
    ///
    /// The connection goes back to the pool when the closure returns,
    /// whether the query succeeded or not.
    async fn with_connection<T, F>(&self, query: F) -> Result<T, ApplicationError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, DatabaseError> + Send + 'static,
    {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get()?;
            query(&conn)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
        .map_err(map_database_error)
    }
}

#[async_trait]
impl ClimateDataPort for SqliteClimateStore {
    #[instrument(skip(self))]
    async fn list_stations(&self) -> Result<Vec<Station>, ApplicationError> {
        self.with_connection(|conn| {
            let sql = format!(
                "SELECT {} FROM {}",
                Station::COLUMNS.join(", "),
                Station::TABLE
            );
            let mut stmt = conn.prepare(&sql)?;
            let stations = stmt
                .query_map([], row_to_station)?
                .collect::<Result<Vec<_>, _>>()?;

            debug!(rows = stations.len(), "Loaded stations");
            Ok(stations)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn precipitation_since(
        &self,
        since: &str,
    ) -> Result<Vec<PrecipitationReading>, ApplicationError> {
        let since = since.to_string();

        self.with_connection(move |conn| {
            let sql = format!(
                "SELECT date, prcp FROM {} WHERE date >= ?1",
                Measurement::TABLE
            );
            let mut stmt = conn.prepare(&sql)?;
            let readings = stmt
                .query_map([&since], |row| {
                    Ok(PrecipitationReading {
                        date: row.get(0)?,
                        prcp: row.get(1)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;

            debug!(rows = readings.len(), "Loaded precipitation readings");
            Ok(readings)
        })
        .await
    }

    #[instrument(skip(self), fields(station = %station))]
    async fn temperature_observations_since(
        &self,
        station: &StationCode,
        since: &str,
    ) -> Result<Vec<TemperatureObservation>, ApplicationError> {
        let station = station.as_str().to_string();
        let since = since.to_string();

        self.with_connection(move |conn| {
            let sql = format!(
                "SELECT date, tobs FROM {} WHERE date >= ?1 AND station = ?2",
                Measurement::TABLE
            );
            let mut stmt = conn.prepare(&sql)?;
            let observations = stmt
                .query_map(params![since, station], |row| {
                    Ok(TemperatureObservation {
                        date: row.get(0)?,
                        tobs: row.get(1)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;

            debug!(rows = observations.len(), "Loaded temperature observations");
            Ok(observations)
        })
        .await
    }

    #[instrument(skip(self), fields(range = %range))]
    async fn temperature_summary(
        &self,
        range: &DateRange,
    ) -> Result<TemperatureSummary, ApplicationError> {
        let range = range.clone();

        self.with_connection(move |conn| {
            let summary = match range.end() {
                Some(end) => conn.query_row(
                    &format!(
                        "SELECT MIN(tobs), MAX(tobs), AVG(tobs) FROM {} \
                         WHERE date >= ?1 AND date <= ?2",
                        Measurement::TABLE
                    ),
                    params![range.start(), end],
                    row_to_summary,
                )?,
                None => conn.query_row(
                    &format!(
                        "SELECT MIN(tobs), MAX(tobs), AVG(tobs) FROM {} WHERE date >= ?1",
                        Measurement::TABLE
                    ),
                    params![range.start()],
                    row_to_summary,
                )?,
            };

            debug!(empty = summary.is_empty(), "Computed temperature summary");
            Ok(summary)
        })
        .await
    }
}

fn row_to_station(row: &Row<'_>) -> rusqlite::Result<Station> {
    Ok(Station {
        id: row.get(0)?,
        station: row.get(1)?,
        name: row.get(2)?,
        latitude: row.get(3)?,
        longitude: row.get(4)?,
        elevation: row.get(5)?,
    })
}

fn row_to_summary(row: &Row<'_>) -> rusqlite::Result<TemperatureSummary> {
    Ok(TemperatureSummary {
        min: row.get(0)?,
        max: row.get(1)?,
        avg: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{persistence::create_pool, testing::SeededDataset};

    fn store_for(dataset: &SeededDataset) -> SqliteClimateStore {
        let pool = create_pool(&dataset.config()).expect("Failed to create pool");
        SqliteClimateStore::new(Arc::new(pool))
    }

    #[tokio::test]
    async fn lists_all_stations_with_exact_values() {
        let dataset = SeededDataset::sample().unwrap();
        let store = store_for(&dataset);

        let stations = store.list_stations().await.unwrap();

        assert_eq!(stations.len(), 3);
        assert_eq!(stations, SeededDataset::sample_stations());
    }

    #[tokio::test]
    async fn precipitation_is_inclusive_of_since() {
        let dataset = SeededDataset::sample().unwrap();
        let store = store_for(&dataset);

        let readings = store.precipitation_since("2016-08-23").await.unwrap();

        assert!(readings.iter().all(|r| r.date.as_str() >= "2016-08-23"));
        assert!(readings.iter().any(|r| r.date == "2016-08-23"));
        assert!(!readings.iter().any(|r| r.date == "2016-08-22"));
    }

    #[tokio::test]
    async fn precipitation_keeps_nulls_and_duplicates() {
        let dataset = SeededDataset::sample().unwrap();
        let store = store_for(&dataset);

        let readings = store.precipitation_since("2016-08-23").await.unwrap();
        let same_day: Vec<_> = readings
            .iter()
            .filter(|r| r.date == "2016-08-23")
            .collect();

        assert_eq!(same_day.len(), 2);
        assert!(same_day.iter().any(|r| r.prcp.is_none()));
    }

    #[tokio::test]
    async fn temperature_observations_filter_station() {
        let dataset = SeededDataset::sample().unwrap();
        let store = store_for(&dataset);

        let observations = store
            .temperature_observations_since(&StationCode::most_active(), "2016-08-23")
            .await
            .unwrap();

        let expected: Vec<_> = SeededDataset::sample_measurements()
            .into_iter()
            .filter(|m| m.station == "USC00519281" && m.date.as_str() >= "2016-08-23")
            .map(|m| TemperatureObservation {
                date: m.date,
                tobs: m.tobs,
            })
            .collect();
        assert_eq!(observations, expected);
    }

    #[tokio::test]
    async fn summary_open_range() {
        let dataset = SeededDataset::sample().unwrap();
        let store = store_for(&dataset);

        let summary = store
            .temperature_summary(&DateRange::starting_at("2017-01-01"))
            .await
            .unwrap();

        let matching: Vec<f64> = SeededDataset::sample_measurements()
            .into_iter()
            .filter(|m| m.date.as_str() >= "2017-01-01")
            .map(|m| m.tobs)
            .collect();
        let avg = matching.iter().sum::<f64>() / matching.len() as f64;

        assert_eq!(summary.min, matching.iter().copied().reduce(f64::min));
        assert_eq!(summary.max, matching.iter().copied().reduce(f64::max));
        assert!((summary.avg.unwrap() - avg).abs() < 1e-9);
    }

    #[tokio::test]
    async fn summary_closed_range_is_inclusive() {
        let dataset = SeededDataset::sample().unwrap();
        let store = store_for(&dataset);

        let summary = store
            .temperature_summary(&DateRange::between("2017-01-01", "2017-01-07"))
            .await
            .unwrap();

        assert_eq!(summary.min, Some(62.0));
        assert_eq!(summary.max, Some(74.0));
        assert!((summary.avg.unwrap() - 68.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn summary_inverted_range_is_empty() {
        let dataset = SeededDataset::sample().unwrap();
        let store = store_for(&dataset);

        let summary = store
            .temperature_summary(&DateRange::between("2017-01-07", "2017-01-01"))
            .await
            .unwrap();

        assert!(summary.is_empty());
    }

    #[tokio::test]
    async fn missing_table_is_a_storage_error() {
        let dataset = SeededDataset::empty().unwrap();
        let store = store_for(&dataset);

        let result = store.list_stations().await;

        assert!(matches!(result, Err(ApplicationError::Storage(_))));
    }
}
