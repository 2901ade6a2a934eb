//! Known degreedays.net station exports and where they live on disk.
//!
//! The 201X set holds ten years (2010 to 2019) of hourly data for seven UK
//! stations, one gzipped export per station. Each file is checked against
//! its expected record count on load so that a truncated download is
//! caught before it skews a summary.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{HourlyTemperature, WeatherError, load_ddn_csv};

/// Directory the temperature exports are kept under, relative to the
/// project root.
pub const DEFAULT_TEMPERATURE_DATA_DIR: &str = "data/temperature";

/// London Heathrow, 2018.
pub const EGLL_2018_FILE: &str = "EGLL_CelsiusTemps_2018_extract.csv.gz";
/// Glasgow, 2018.
pub const EGPF_2018_FILE: &str = "EGPF_CelsiusTemps_2018_extract.csv.gz";

/// Subdirectory of the data directory holding the 201X set.
pub const DATASET_201X_DIR: &str = "201X";
/// File name following the station code in the 201X set.
pub const DATASET_201X_FILE_TAIL: &str = "_CelsiusTemps_201X_extract.csv.gz";
/// Hours from 2010-01-01 to 2019-12-31 inclusive.
pub const RECORD_COUNT_201X: usize = 87_648;

/// One station's export within a data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationDescriptor {
    /// ICAO code, also the file name prefix.
    pub station: &'static str,
    /// Nearest conurbation.
    pub conurbation: &'static str,
    /// Expected hourly record count.
    pub records: usize,
}

const fn station_201x(station: &'static str, conurbation: &'static str) -> StationDescriptor {
    StationDescriptor {
        station,
        conurbation,
        records: RECORD_COUNT_201X,
    }
}

/// The 201X set, ordered by station code.
pub const DATASET_201X: &[StationDescriptor] = &[
    station_201x("EGAA", "Belfast"),
    station_201x("EGCC", "Manchester"),
    station_201x("EGFF", "Cardiff"),
    station_201x("EGLL", "London"),
    station_201x("EGNT", "Newcastle"),
    station_201x("EGPF", "Glasgow"),
    station_201x("EGPH", "Edinburgh"),
];

impl StationDescriptor {
    /// Path of this station's 201X export under `data_dir`.
    pub fn path_201x(&self, data_dir: &Path) -> PathBuf {
        data_dir
            .join(DATASET_201X_DIR)
            .join(format!("{}{}", self.station, DATASET_201X_FILE_TAIL))
    }

    /// Short label for report rows, e.g. `EGLL London`.
    pub fn label(&self) -> String {
        format!("{} {}", self.station, self.conurbation)
    }

    /// # Errors
    ///
    /// Returns `WeatherError::RecordCount` if `hours` is not exactly the
    /// expected length.
    pub fn check_record_count(&self, hours: &[HourlyTemperature]) -> Result<(), WeatherError> {
        if hours.len() == self.records {
            Ok(())
        } else {
            Err(WeatherError::RecordCount {
                station: self.station,
                expected: self.records,
                found: hours.len(),
            })
        }
    }

    /// Loads and length-checks this station's 201X export.
    ///
    /// # Errors
    ///
    /// Any `WeatherError` from loading, or `RecordCount` on a short or long
    /// file.
    pub fn load_201x(&self, data_dir: &Path) -> Result<Vec<HourlyTemperature>, WeatherError> {
        let path = self.path_201x(data_dir);
        debug!(station = self.station, path = %path.display(), "loading station export");
        let hours = load_ddn_csv(&path)?;
        self.check_record_count(&hours)?;
        Ok(hours)
    }
}

/// Loads every station of the 201X set under `data_dir`.
///
/// # Errors
///
/// Stops at the first station that fails to load or has the wrong record
/// count.
pub fn load_dataset_201x(
    data_dir: &Path,
) -> Result<Vec<(StationDescriptor, Vec<HourlyTemperature>)>, WeatherError> {
    let loaded = DATASET_201X
        .iter()
        .map(|d| d.load_201x(data_dir).map(|hours| (*d, hours)))
        .collect::<Result<Vec<_>, _>>()?;
    info!(stations = loaded.len(), dir = %data_dir.display(), "loaded 201X data set");
    Ok(loaded)
}
