//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use trv_setback::weather::stations::{DEFAULT_TEMPERATURE_DATA_DIR, EGLL_2018_FILE};
use trv_setback::weather::{HourlyTemperature, load_ddn_csv};

/// Path to a file under `tests/data`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Loads a degreedays.net fixture from `tests/data`.
pub fn load_fixture(name: &str) -> Vec<HourlyTemperature> {
    load_ddn_csv(fixture_path(name)).expect("fixture should parse")
}

/// Location of the gzipped London 2018 hourly export.
///
/// Overridden by `TRV_LONDON_2018_CSV`.
pub fn london_2018_path() -> PathBuf {
    std::env::var_os("TRV_LONDON_2018_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join(DEFAULT_TEMPERATURE_DATA_DIR)
                .join(EGLL_2018_FILE)
        })
}

/// A temperature ramp from `from_c` down to `to_c` in `n` hourly steps.
pub fn ramp(from_c: f64, to_c: f64, n: usize) -> Vec<f64> {
    let step = if n > 1 { (to_c - from_c) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(|i| from_c + step * i as f64).collect()
}
