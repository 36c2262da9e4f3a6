//! Seeded SQLite datasets for tests.

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use domain::{Measurement, Station};
use rusqlite::{Connection, params};
use tempfile::TempDir;

use crate::config::DatabaseConfig;

const SCHEMA: &str = "
    CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    );
";

/// A temporary dataset file, deleted on drop
#[derive(Debug)]
pub struct SeededDataset {
    _dir: TempDir,
    path: PathBuf,
}

impl SeededDataset {
    /// Create a dataset holding exactly the given rows, in insertion order
    pub fn create(
        stations: &[Station],
        measurements: &[Measurement],
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let dataset = Self::blank()?;
        let conn = Connection::open(&dataset.path)?;
        conn.execute_batch(SCHEMA)?;

        let insert_station = format!(
            "INSERT INTO {} ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            Station::TABLE,
            Station::COLUMNS.join(", ")
        );
        for s in stations {
            conn.execute(
                &insert_station,
                params![s.id, s.station, s.name, s.latitude, s.longitude, s.elevation],
            )?;
        }

        let insert_measurement = format!(
            "INSERT INTO {} ({}) VALUES (?1, ?2, ?3, ?4)",
            Measurement::TABLE,
            Measurement::COLUMNS.join(", ")
        );
        for m in measurements {
            conn.execute(
                &insert_measurement,
                params![m.station, m.date, m.prcp, m.tobs],
            )?;
        }

        Ok(dataset)
    }

    /// The standard fixture: three Oahu stations and a handful of days
    /// around the lookback start and the first week of 2017
    pub fn sample() -> Result<Self, Box<dyn Error + Send + Sync>> {
        Self::create(&Self::sample_stations(), &Self::sample_measurements())
    }

    /// A valid SQLite file without the climate tables
    pub fn empty() -> Result<Self, Box<dyn Error + Send + Sync>> {
        let dataset = Self::blank()?;
        let conn = Connection::open(&dataset.path)?;
        conn.execute_batch("CREATE TABLE unrelated (x INTEGER);")?;
        Ok(dataset)
    }

    fn blank() -> Result<Self, Box<dyn Error + Send + Sync>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hawaii.sqlite");
        Ok(Self { _dir: dir, path })
    }

    /// Path of the dataset file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pool configuration pointing at this dataset
    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig {
            path: self.path.to_string_lossy().into_owned(),
            max_connections: 2,
            connection_timeout_secs: 1,
        }
    }

    /// Station rows of [`SeededDataset::sample`]
    pub fn sample_stations() -> Vec<Station> {
        vec![
            station(1, "USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
            station(2, "USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
            station(7, "USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
        ]
    }

    /// Measurement rows of [`SeededDataset::sample`], in insertion order
    pub fn sample_measurements() -> Vec<Measurement> {
        vec![
            measurement("USC00519397", "2016-08-22", Some(0.4), 78.0),
            measurement("USC00519397", "2016-08-23", Some(0.0), 81.0),
            measurement("USC00513117", "2016-08-23", None, 76.0),
            measurement("USC00519281", "2016-08-22", Some(0.2), 77.0),
            measurement("USC00519281", "2016-08-24", Some(2.15), 77.0),
            measurement("USC00519281", "2016-12-31", Some(0.0), 55.0),
            measurement("USC00519397", "2017-01-01", Some(0.0), 62.0),
            measurement("USC00513117", "2017-01-04", Some(0.18), 68.0),
            measurement("USC00519281", "2017-01-07", Some(0.0), 74.0),
            measurement("USC00519281", "2017-01-08", Some(0.05), 90.0),
            measurement("USC00519397", "2017-08-23", Some(0.0), 81.0),
        ]
    }
}

fn station(
    id: i64,
    code: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Station {
    Station {
        id,
        station: code.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        elevation,
    }
}

fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_file_is_removed_on_drop() {
        let dataset = SeededDataset::sample().unwrap();
        let path = dataset.path().to_path_buf();
        assert!(path.is_file());

        drop(dataset);
        assert!(!path.exists());
    }

    #[test]
    fn create_keeps_insertion_order() {
        let dataset = SeededDataset::sample().unwrap();
        let conn = Connection::open(dataset.path()).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM measurement", [], |row| row.get(0))
            .unwrap();
        let first: String = conn
            .query_row(
                "SELECT date FROM measurement ORDER BY id LIMIT 1",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(count, 11);
        assert_eq!(first, "2016-08-22");
    }
}
