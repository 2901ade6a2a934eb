//! Per-hour records and driver options.

use std::fmt;

use crate::model::constants::DEFAULT_BASE_HEATING_TEMPERATURE_C;
use crate::model::DemandWithoutAndWithSetback;

use super::summary::{MeanBasis, ScenarioResult};

/// Options for the hourly driver.
///
/// # Examples
///
/// ```
/// use trv_setback::sim::{EngineOptions, MeanBasis};
///
/// let opts = EngineOptions::default();
/// assert_eq!(opts.heating_threshold_c, 15.5);
/// assert_eq!(opts.mean_basis, MeanBasis::HeatingHours);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Hours at or above this external temperature need no heating (C).
    pub heating_threshold_c: f64,
    /// Divisor used when turning sums into means.
    pub mean_basis: MeanBasis,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            heating_threshold_c: DEFAULT_BASE_HEATING_TEMPERATURE_C,
            mean_basis: MeanBasis::default(),
        }
    }
}

/// Complete record of one heating hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourResult {
    /// Position of the hour in the input series.
    pub index: usize,
    /// Timestamp text carried over from the input, if any.
    pub timestamp: Option<String>,
    /// External air temperature for the hour (C).
    pub external_c: f64,
    pub demand: DemandWithoutAndWithSetback,
    /// A-room equilibrium temperature (soft regulation only).
    pub equilibrium_temperature_a_c: Option<f64>,
    /// Whether setback raised heat-pump electricity this hour.
    pub setback_raises_demand: bool,
}

impl fmt::Display for HourResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "h={:>5} ext={:>5.1}C | heat {:>7.1} -> {:>7.1} W | elec {:>6.1} -> {:>6.1} W",
            self.index,
            self.external_c,
            self.demand.no_setback.heat_demand_w,
            self.demand.with_setback.heat_demand_w,
            self.demand.no_setback.heat_pump_electricity_w,
            self.demand.with_setback.heat_pump_electricity_w,
        )?;
        if let Some(eq) = self.equilibrium_temperature_a_c {
            write!(f, " | A={eq:.2}C")?;
        }
        if self.setback_raises_demand {
            write!(f, " | raises")?;
        }
        Ok(())
    }
}

/// Heating-hour records together with their aggregate.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    pub hours: Vec<HourResult>,
    pub summary: ScenarioResult,
}
