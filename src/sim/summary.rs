//! Post-hoc aggregation of hourly results.

use std::fmt;

use serde::Deserialize;

use crate::model::{Archetype, DemandWithoutAndWithSetback, HeatAndElectricityDemand, Regulation};

use super::types::HourResult;

/// Divisor used to turn hourly sums into means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeanBasis {
    /// Divide by the number of heating hours evaluated.
    #[default]
    HeatingHours,
    /// Divide by every hour in the series, counting non-heating hours as zero
    /// demand. Gives annual mean power over a full year of data.
    AllHours,
}

impl fmt::Display for MeanBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeanBasis::HeatingHours => write!(f, "heating_hours"),
            MeanBasis::AllHours => write!(f, "all_hours"),
        }
    }
}

/// Aggregate demand over an hourly series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub archetype: Archetype,
    pub regulation: Regulation,
    pub mean_basis: MeanBasis,
    /// Hours where setback raised electricity, over the mean basis, in [0, 1].
    pub hours_fraction_setback_raises_demand: f64,
    /// Mean demand without and with setback.
    pub mean: DemandWithoutAndWithSetback,
    /// Every hour in the input series.
    pub total_hours: usize,
    /// Hours below the heating threshold, i.e. evaluated.
    pub heating_hours: usize,
    pub hours_setback_raises_demand: usize,
    /// Lowest A-room equilibrium temperature seen (soft regulation only).
    pub min_equilibrium_temperature_a_c: Option<f64>,
}

impl ScenarioResult {
    /// Folds the heating-hour records into means and counts.
    ///
    /// # Arguments
    ///
    /// * `hours` - Records for the evaluated (heating) hours
    /// * `total_hours` - Length of the full input series
    /// * `archetype` - Dwelling the hours were evaluated for
    /// * `regulation` - Regulation the hours were evaluated with
    /// * `mean_basis` - Divisor for means and the fraction
    ///
    /// # Returns
    ///
    /// A `ScenarioResult`; all means are zero if the divisor is zero.
    pub fn from_hours(
        hours: &[HourResult],
        total_hours: usize,
        archetype: Archetype,
        regulation: Regulation,
        mean_basis: MeanBasis,
    ) -> Self {
        let mut heat_nsb = 0.0;
        let mut heat_sb = 0.0;
        let mut elec_nsb = 0.0;
        let mut elec_sb = 0.0;
        let mut raises = 0_usize;
        let mut min_eq: Option<f64> = None;

        for h in hours {
            heat_nsb += h.demand.no_setback.heat_demand_w;
            heat_sb += h.demand.with_setback.heat_demand_w;
            elec_nsb += h.demand.no_setback.heat_pump_electricity_w;
            elec_sb += h.demand.with_setback.heat_pump_electricity_w;
            if h.setback_raises_demand {
                raises += 1;
            }
            if let Some(eq) = h.equilibrium_temperature_a_c {
                min_eq = Some(min_eq.map_or(eq, |m| m.min(eq)));
            }
        }

        let divisor = match mean_basis {
            MeanBasis::HeatingHours => hours.len(),
            MeanBasis::AllHours => total_hours,
        };
        let mean = |sum: f64| if divisor > 0 { sum / divisor as f64 } else { 0.0 };

        Self {
            archetype,
            regulation,
            mean_basis,
            hours_fraction_setback_raises_demand: mean(raises as f64),
            mean: DemandWithoutAndWithSetback::new(
                HeatAndElectricityDemand::new(mean(heat_nsb), mean(elec_nsb)),
                HeatAndElectricityDemand::new(mean(heat_sb), mean(elec_sb)),
            ),
            total_hours,
            heating_hours: hours.len(),
            hours_setback_raises_demand: raises,
            min_equilibrium_temperature_a_c: min_eq,
        }
    }
}

impl fmt::Display for ScenarioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Scenario Summary ---")?;
        writeln!(f, "Archetype:              {}", self.archetype)?;
        writeln!(f, "Regulation:             {}", self.regulation)?;
        writeln!(
            f,
            "Hours:                  {} heating of {} total (means over {})",
            self.heating_hours, self.total_hours, self.mean_basis
        )?;
        writeln!(
            f,
            "Setback raises demand:  {} hours (fraction {:.3})",
            self.hours_setback_raises_demand, self.hours_fraction_setback_raises_demand
        )?;
        writeln!(
            f,
            "Mean heat demand:       {:.1} W -> {:.1} W",
            self.mean.no_setback.heat_demand_w, self.mean.with_setback.heat_demand_w
        )?;
        write!(
            f,
            "Mean HP electricity:    {:.1} W -> {:.1} W",
            self.mean.no_setback.heat_pump_electricity_w,
            self.mean.with_setback.heat_pump_electricity_w
        )?;
        if let Some(eq) = self.min_equilibrium_temperature_a_c {
            write!(f, "\nMin A-room temperature: {eq:.2} C")?;
        }
        Ok(())
    }
}
