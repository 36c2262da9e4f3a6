//! Value Objects - Immutable, identity-less domain primitives

mod date_range;
mod reporting_period;
mod station_code;

pub use date_range::DateRange;
pub use reporting_period::{
    LOOKBACK_DAYS, REFERENCE_DATE, lookback_start, one_year_before_reference,
};
pub use station_code::{MOST_ACTIVE_STATION, StationCode};
