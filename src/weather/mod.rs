//! Hourly external air temperature series.
//!
//! Series come either from degreedays.net hourly CSV exports ([`ddn`]) or
//! from a seeded synthetic year ([`synthetic`]). [`stations`] names the
//! known station exports and checks their length. The hourly driver accepts
//! anything implementing [`TemperatureReading`], so plain `f64` slices work
//! too.

pub mod ddn;
pub mod stations;
pub mod synthetic;

use thiserror::Error;

pub use ddn::{load_ddn_csv, parse_ddn_csv};
pub use stations::{DATASET_201X, StationDescriptor};
pub use synthetic::SyntheticWeather;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("cannot read temperature data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed temperature CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: data row has no temperature field {index}")]
    MissingField { line: u64, index: usize },

    #[error("line {line}: invalid temperature {value:?}")]
    BadTemperature { line: u64, value: String },

    #[error("{station}: expected {expected} hourly records, found {found}")]
    RecordCount {
        station: &'static str,
        expected: usize,
        found: usize,
    },
}

/// One hour of the consumed series.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyTemperature {
    /// Source timestamp text, where the series was loaded from a file.
    pub timestamp: Option<String>,
    /// External air temperature (C).
    pub temperature_c: f64,
}

impl HourlyTemperature {
    pub fn new(timestamp: Option<String>, temperature_c: f64) -> Self {
        Self {
            timestamp,
            temperature_c,
        }
    }
}

/// Anything that yields one external temperature per hour.
pub trait TemperatureReading {
    /// External air temperature (C).
    fn temperature_c(&self) -> f64;

    /// Timestamp label carried through to per-hour results.
    fn timestamp(&self) -> Option<&str> {
        None
    }
}

impl TemperatureReading for f64 {
    fn temperature_c(&self) -> f64 {
        *self
    }
}

impl TemperatureReading for HourlyTemperature {
    fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_floats_have_no_timestamp() {
        let t = 4.5_f64;
        assert_eq!(t.temperature_c(), 4.5);
        assert!(t.timestamp().is_none());
    }

    #[test]
    fn hourly_record_exposes_timestamp() {
        let h = HourlyTemperature::new(Some("2018-01-01 00:00".to_string()), 7.0);
        assert_eq!(h.temperature_c(), 7.0);
        assert_eq!(h.timestamp(), Some("2018-01-01 00:00"));
    }
}
