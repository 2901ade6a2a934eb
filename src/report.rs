//! Plain-text reports: the worked reference computation, the soft
//! regulation sag table and the scenario summary table.

use std::fmt;

use tracing::{debug, warn};

use crate::error::ModelResult;
use crate::model::constants::{
    HEAT_PUMP_POWER_IN_B_SETBACK_W, HEAT_PUMP_POWER_IN_NO_SETBACK_W, HOME_HEAT_LOSS_B_SETBACK_W,
    HOME_HEAT_LOSS_AT_NORMAL_ROOM_TEMPERATURE_W, NORMAL_ROOM_TEMPERATURE_C,
};
use crate::model::dwelling::Dwelling;
use crate::model::physics::b_radiator_output_with_setback_w;
use crate::model::{
    Archetype, DemandWithoutAndWithSetback, ModelParameters, Regulation, compute_demand_w,
    compute_soft_a_temp_demand_w,
};
use crate::sim::{EngineOptions, ScenarioResult, run_scenario_with_options};
use crate::weather::TemperatureReading;

/// External temperatures used for the sag table by default (C).
pub const DEFAULT_SAG_TEMPERATURES_C: &[f64] = &[-5.0, -3.0, 0.0, 3.0, 6.0, 9.0, 12.0, 15.0];

/// The model evaluated at a single external temperature, next to the
/// published hard-wired figures.
#[derive(Debug, Clone)]
pub struct ReferenceReport {
    pub archetype: Archetype,
    pub params: ModelParameters,
    /// Stiff regulation demand.
    pub stiff: DemandWithoutAndWithSetback,
    /// Soft regulation demand.
    pub soft: DemandWithoutAndWithSetback,
    /// A-room equilibrium under soft regulation (C).
    pub soft_equilibrium_a_c: f64,
    /// Each A radiator's output with the B rooms set back (W).
    pub a_radiator_output_setback_w: f64,
    /// What is left for each B radiator with setback (W).
    pub b_radiator_output_setback_w: f64,
}

impl ReferenceReport {
    /// Evaluates both solvers at the parameters' external temperature.
    ///
    /// # Errors
    ///
    /// Propagates any `ModelError` from the solvers.
    pub fn compute(params: &ModelParameters, archetype: Archetype) -> ModelResult<Self> {
        let stiff = compute_demand_w(params, archetype)?;
        let soft = compute_soft_a_temp_demand_w(params, archetype)?;

        let dwelling = match archetype {
            Archetype::Bungalow => Dwelling::reference_bungalow(),
            Archetype::Detached => Dwelling::from_areas(archetype),
        };
        let external_c = params.external_air_temperature_c();
        let a_output_w = dwelling.ref_radiator_output_w(external_c)
            + dwelling.internal_loss_per_a_w(params, NORMAL_ROOM_TEMPERATURE_C)?;
        let b_output_w =
            b_radiator_output_with_setback_w(stiff.with_setback.heat_demand_w, a_output_w, dwelling.room_count);

        Ok(Self {
            archetype,
            params: *params,
            stiff,
            soft: soft.demand,
            soft_equilibrium_a_c: soft.equilibrium_temperature_a_c,
            a_radiator_output_setback_w: a_output_w,
            b_radiator_output_setback_w: b_output_w,
        })
    }
}

impl fmt::Display for ReferenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        writeln!(f, "--- Reference Computation ---")?;
        writeln!(
            f,
            "Published model:        heat {:.0} W / {:.0} W, electricity {:.0} W / {:.0} W",
            HOME_HEAT_LOSS_AT_NORMAL_ROOM_TEMPERATURE_W,
            HOME_HEAT_LOSS_B_SETBACK_W,
            HEAT_PUMP_POWER_IN_NO_SETBACK_W,
            HEAT_PUMP_POWER_IN_B_SETBACK_W
        )?;
        writeln!(
            f,
            "Parameters:             {} at {:.1} C, doors/wall {}, CoP flow correction {}, {}",
            self.archetype,
            p.external_air_temperature_c(),
            p.doors_per_internal_wall(),
            p.correct_cop_for_flow_vs_mw(),
            if p.rooms_alternating_abab() { "ABAB" } else { "AABB" }
        )?;
        writeln!(
            f,
            "Stiff:                  heat {:.0} W / {:.0} W, electricity {:.0} W / {:.0} W",
            self.stiff.no_setback.heat_demand_w,
            self.stiff.with_setback.heat_demand_w,
            self.stiff.no_setback.heat_pump_electricity_w,
            self.stiff.with_setback.heat_pump_electricity_w
        )?;
        writeln!(
            f,
            "Soft:                   heat {:.0} W / {:.0} W, electricity {:.0} W / {:.0} W, A rooms {:.2} C",
            self.soft.no_setback.heat_demand_w,
            self.soft.with_setback.heat_demand_w,
            self.soft.no_setback.heat_pump_electricity_w,
            self.soft.with_setback.heat_pump_electricity_w,
            self.soft_equilibrium_a_c
        )?;
        writeln!(
            f,
            "Radiators with setback: A {:.0} W, B {:.0} W",
            self.a_radiator_output_setback_w, self.b_radiator_output_setback_w
        )?;
        write!(
            f,
            "Setback raises electricity: stiff {}, soft {}",
            self.stiff.setback_raises_electricity(),
            self.soft.setback_raises_electricity()
        )
    }
}

/// One row of the sag table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SagRow {
    pub external_c: f64,
    /// A-room equilibrium under soft regulation (C).
    pub equilibrium_a_c: f64,
    /// Drop below normal temperature (K).
    pub sag_k: f64,
    pub elec_no_setback_w: f64,
    pub elec_setback_stiff_w: f64,
    pub elec_setback_soft_w: f64,
}

/// How far the A rooms sag under soft regulation across external temperatures.
#[derive(Debug, Clone)]
pub struct SagTable {
    pub archetype: Archetype,
    pub rows: Vec<SagRow>,
}

impl SagTable {
    /// Evaluates one row per external temperature.
    ///
    /// # Errors
    ///
    /// Propagates any `ModelError`, including `OutsideDomain` for a
    /// temperature at or above setback.
    pub fn compute(
        params: &ModelParameters,
        archetype: Archetype,
        external_temperatures_c: &[f64],
    ) -> ModelResult<Self> {
        let rows = external_temperatures_c
            .iter()
            .map(|&external_c| {
                let p = params.with_external_temperature(external_c);
                let stiff = compute_demand_w(&p, archetype)?;
                let soft = compute_soft_a_temp_demand_w(&p, archetype)?;
                Ok(SagRow {
                    external_c,
                    equilibrium_a_c: soft.equilibrium_temperature_a_c,
                    sag_k: soft.temperature_sag_k(),
                    elec_no_setback_w: stiff.no_setback.heat_pump_electricity_w,
                    elec_setback_stiff_w: stiff.with_setback.heat_pump_electricity_w,
                    elec_setback_soft_w: soft.demand.with_setback.heat_pump_electricity_w,
                })
            })
            .collect::<ModelResult<Vec<_>>>()?;
        Ok(Self { archetype, rows })
    }
}

impl fmt::Display for SagTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Soft Regulation Sag ({}) ---", self.archetype)?;
        write!(
            f,
            "{:>7}  {:>7}  {:>6}  {:>9}  {:>9}  {:>9}",
            "ext C", "A C", "sag K", "elec nsb", "sb stiff", "sb soft"
        )?;
        for r in &self.rows {
            write!(
                f,
                "\n{:>7.1}  {:>7.2}  {:>6.2}  {:>9.1}  {:>9.1}  {:>9.1}",
                r.external_c,
                r.equilibrium_a_c,
                r.sag_k,
                r.elec_no_setback_w,
                r.elec_setback_stiff_w,
                r.elec_setback_soft_w
            )?;
        }
        Ok(())
    }
}

/// One series run for one dwelling shape and room layout.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    /// Label of the temperature series.
    pub series: String,
    pub archetype: Archetype,
    pub rooms_alternating_abab: bool,
    /// A run that fails (e.g. no soft balance point in a cold hour) keeps
    /// its error so the rest of the table is still reported.
    pub outcome: ModelResult<ScenarioResult>,
}

/// Scenario results for every archetype and room layout over one or more
/// labelled temperature series, under a single regulation.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    pub regulation: Regulation,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Runs the hourly driver once per series, archetype and layout.
    ///
    /// Rows come out series first, then bungalow before detached, then
    /// ABAB before AABB.
    pub fn compute<T: TemperatureReading>(
        params: &ModelParameters,
        regulation: Regulation,
        options: EngineOptions,
        series: &[(&str, &[T])],
    ) -> Self {
        let mut rows = Vec::with_capacity(series.len() * 4);
        for &(label, temperatures) in series {
            for archetype in [Archetype::Bungalow, Archetype::Detached] {
                for abab in [true, false] {
                    debug!(series = label, %archetype, abab, %regulation, "summary run");
                    let p = params.with_rooms_alternating_abab(abab);
                    let outcome = run_scenario_with_options(&p, temperatures, archetype, regulation, options)
                        .map(|run| run.summary);
                    if let Err(ref e) = outcome {
                        warn!(series = label, %archetype, abab, %regulation, error = %e, "summary run failed");
                    }
                    rows.push(SummaryRow {
                        series: label.to_string(),
                        archetype,
                        rooms_alternating_abab: abab,
                        outcome,
                    });
                }
            }
        }
        Self { regulation, rows }
    }

    /// Stiff and soft tables over the same series.
    pub fn compute_both<T: TemperatureReading>(
        params: &ModelParameters,
        options: EngineOptions,
        series: &[(&str, &[T])],
    ) -> [Self; 2] {
        [Regulation::Stiff, Regulation::Soft].map(|regulation| Self::compute(params, regulation, options, series))
    }

    pub fn failed_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.outcome.is_err()).count()
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Scenario Summary Table ({}) ---", self.regulation)?;
        write!(
            f,
            "{:<16}  {:<9}  {:<6}  {:>6}  {:>8}  {:>8}  {:>8}  {:>8}  {:>7}",
            "series", "archetype", "layout", "raises", "heat nsb", "heat sb", "elec nsb", "elec sb", "min A C"
        )?;
        for r in &self.rows {
            write!(
                f,
                "\n{:<16}  {:<9}  {:<6}",
                r.series,
                r.archetype.to_string(),
                if r.rooms_alternating_abab { "ABAB" } else { "AABB" }
            )?;
            match r.outcome {
                Ok(ref s) => {
                    let min_a = s
                        .min_equilibrium_temperature_a_c
                        .map_or_else(|| "-".to_string(), |t| format!("{t:.2}"));
                    write!(
                        f,
                        "  {:>6.3}  {:>8.1}  {:>8.1}  {:>8.1}  {:>8.1}  {:>7}",
                        s.hours_fraction_setback_raises_demand,
                        s.mean.no_setback.heat_demand_w,
                        s.mean.with_setback.heat_demand_w,
                        s.mean.no_setback.heat_pump_electricity_w,
                        s.mean.with_setback.heat_pump_electricity_w,
                        min_a
                    )?;
                }
                Err(ref e) => write!(f, "  failed: {e}")?,
            }
        }
        Ok(())
    }
}
