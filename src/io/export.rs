//! CSV export for per-hour scenario results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::HourResult;

/// Column header for the hourly export.
const HEADER: &str = "hour,timestamp,external_c,heat_no_setback_w,heat_with_setback_w,\
                       elec_no_setback_w,elec_with_setback_w,equilibrium_a_c,setback_raises_demand";

/// Exports per-hour results to a CSV file at the given path.
///
/// Writes a header row followed by one data row per heating hour. Produces
/// deterministic output for identical inputs.
///
/// # Arguments
///
/// * `hours` - Per-hour results from a scenario run
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(hours: &[HourResult], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(hours, buf)
}

/// Writes per-hour results as CSV to any writer.
///
/// Timestamp and equilibrium columns are left empty where absent.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(hours: &[HourResult], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for h in hours {
        wtr.write_record(&[
            h.index.to_string(),
            h.timestamp.clone().unwrap_or_default(),
            format!("{:.2}", h.external_c),
            format!("{:.2}", h.demand.no_setback.heat_demand_w),
            format!("{:.2}", h.demand.with_setback.heat_demand_w),
            format!("{:.2}", h.demand.no_setback.heat_pump_electricity_w),
            format!("{:.2}", h.demand.with_setback.heat_pump_electricity_w),
            h.equilibrium_temperature_a_c
                .map(|t| format!("{t:.2}"))
                .unwrap_or_default(),
            h.setback_raises_demand.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
