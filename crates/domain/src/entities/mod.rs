//! Domain entities - read-only records of the climate dataset

mod measurement;
mod station;

pub use measurement::{
    Measurement, PrecipitationReading, TemperatureObservation, TemperatureSummary,
};
pub use station::Station;
