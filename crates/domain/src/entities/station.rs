//! Weather station record

use serde::{Deserialize, Serialize};

/// A row of the `station` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Surrogate row identifier
    pub id: i64,
    /// External station code, unique across stations
    pub station: String,
    /// Human-readable station name
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Elevation in meters
    pub elevation: f64,
}

impl Station {
    /// Table the records are read from
    pub const TABLE: &'static str = "station";

    /// Columns in projection order
    pub const COLUMNS: [&'static str; 6] =
        ["id", "station", "name", "latitude", "longitude", "elevation"];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waikiki() -> Station {
        Station {
            id: 1,
            station: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        }
    }

    #[test]
    fn columns_match_field_order() {
        let json = serde_json::to_string(&waikiki()).unwrap();
        let positions: Vec<usize> = Station::COLUMNS
            .iter()
            .map(|c| json.find(&format!("\"{c}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn serialization_keeps_values() {
        let value = serde_json::to_value(waikiki()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["station"], "USC00519397");
        assert_eq!(value["latitude"], 21.2716);
        assert_eq!(value["elevation"], 3.0);
    }
}
