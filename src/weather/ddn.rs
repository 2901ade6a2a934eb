//! degreedays.net hourly temperature CSV.
//!
//! The export starts with a few `Key:,value` description lines and a column
//! header, then one row per hour:
//!
//! ```text
//! Datetime,Timezone,Date,Time,Temp (°C),% Estimated
//! 2018-01-01 00:00,GMT,2018-01-01,00:00,7,0
//! ```
//!
//! Files are ISO-8859-1 (the degree sign in the header is byte 0xB0), so
//! rows are read as raw bytes and only data fields are decoded. Exports are
//! usually kept gzipped; a `.gz` path is decompressed on the fly.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use flate2::read::GzDecoder;
use tracing::debug;

use super::{HourlyTemperature, WeatherError};

/// Field holding the timestamp in each data row.
pub const INDEX_OF_DATETIME: usize = 0;
/// Field holding the temperature (C) in each data row.
pub const INDEX_OF_TEMPERATURE: usize = 4;

/// Parses a degreedays.net hourly CSV stream.
///
/// Rows whose first field does not start with `2` (a date) are skipped, so
/// description, header, blank and comment lines are ignored.
///
/// # Errors
///
/// Returns `WeatherError` if the stream cannot be read, or a data row lacks
/// a parseable temperature.
pub fn parse_ddn_csv(reader: impl Read) -> Result<Vec<HourlyTemperature>, WeatherError> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut hours = Vec::new();
    let mut record = ByteRecord::new();
    while csv_reader.read_byte_record(&mut record)? {
        if !record.get(0).is_some_and(|f| f.starts_with(b"2")) {
            continue;
        }
        hours.push(parse_row(&record)?);
    }

    debug!(hours = hours.len(), "parsed hourly temperature CSV");
    Ok(hours)
}

/// Loads a degreedays.net hourly CSV file, gunzipping it if the name ends
/// in `.gz`.
///
/// # Errors
///
/// As [`parse_ddn_csv`], plus `WeatherError::Io` if the file cannot be opened
/// or is not valid gzip.
pub fn load_ddn_csv(path: impl AsRef<Path>) -> Result<Vec<HourlyTemperature>, WeatherError> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);
    if is_gzip_path(path) {
        parse_ddn_csv(GzDecoder::new(file))
    } else {
        parse_ddn_csv(file)
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

fn parse_row(record: &ByteRecord) -> Result<HourlyTemperature, WeatherError> {
    let line = record.position().map_or(0, |p| p.line());

    let timestamp = latin1(record.get(INDEX_OF_DATETIME).unwrap_or_default());

    let raw = record
        .get(INDEX_OF_TEMPERATURE)
        .ok_or(WeatherError::MissingField {
            line,
            index: INDEX_OF_TEMPERATURE,
        })?;
    let text = latin1(raw);
    let temperature_c = match text.trim().parse::<f64>() {
        Ok(t) if t.is_finite() => t,
        _ => return Err(WeatherError::BadTemperature { line, value: text }),
    };

    Ok(HourlyTemperature::new(Some(timestamp), temperature_c))
}

/// ISO-8859-1 maps each byte straight to the code point of the same value.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
