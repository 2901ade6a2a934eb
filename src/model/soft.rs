//! Soft regulation: the flow temperature stays at its weather-compensated,
//! no-setback value and the A rooms are left to sag until their radiator
//! output balances their losses.

use tracing::debug;

use crate::error::{ModelError, ModelResult};

use super::constants::{
    EQUILIBRIUM_SCAN_STEP_K, NORMAL_ROOM_TEMPERATURE_C, SETBACK_ROOM_TEMPERATURE_C,
};
use super::dwelling::{Dwelling, check_domain};
use super::params::ModelParameters;
use super::physics::{flow_temperature_c, heat_pump_electricity_w, radiator_output_at_w};
use super::stiff::compute_demand_w;
use super::types::{Archetype, DemandWithoutAndWithSetback, HeatAndElectricityDemand, SoftDemand};

/// Number of scan steps from setback up to normal temperature.
fn scan_steps() -> usize {
    ((NORMAL_ROOM_TEMPERATURE_C - SETBACK_ROOM_TEMPERATURE_C) / EQUILIBRIUM_SCAN_STEP_K).round()
        as usize
}

/// A-room equilibrium temperature and the whole-home heat loss there.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Equilibrium {
    temperature_a_c: f64,
    home_heat_loss_w: f64,
}

/// Demand with soft A-room regulation, and the A-room equilibrium temperature.
///
/// The no-setback half is the stiff-regulation result: soft regulation only
/// changes anything while the B rooms are set back.
///
/// # Errors
///
/// Returns `ModelError::OutsideDomain` if it is not colder outside than the
/// setback rooms, `ModelError::EquilibriumNotFound` if the scan finds no
/// balance point, or `ModelError::NonPhysicalCoP`.
pub fn compute_soft_a_temp_demand_w(params: &ModelParameters, archetype: Archetype) -> ModelResult<SoftDemand> {
    let stiff = compute_demand_w(params, archetype)?;
    let external_c = check_domain(params)?;

    let dwelling = match archetype {
        Archetype::Bungalow => Dwelling::reference_bungalow(),
        Archetype::Detached => Dwelling::from_areas(archetype),
    };
    let pinned_mean_water_c = dwelling.no_setback_mean_water_c(external_c);
    let equilibrium = find_equilibrium(params, &dwelling, external_c, pinned_mean_water_c)?;

    // Flow temperature is unchanged, so is the CoP.
    let elec_setback_w = heat_pump_electricity_w(
        equilibrium.home_heat_loss_w,
        flow_temperature_c(params, pinned_mean_water_c),
    )?;

    debug!(
        %archetype,
        external_c,
        equilibrium_a_c = equilibrium.temperature_a_c,
        heat_setback_w = equilibrium.home_heat_loss_w,
        elec_setback_w,
        "soft regulation equilibrium"
    );

    Ok(SoftDemand {
        demand: DemandWithoutAndWithSetback::new(
            stiff.no_setback,
            HeatAndElectricityDemand::new(equilibrium.home_heat_loss_w, elec_setback_w),
        ),
        equilibrium_temperature_a_c: equilibrium.temperature_a_c,
    })
}

/// Walks the A-room temperature up from setback in fixed steps and stops at
/// the first step where radiator output falls short of losses, keeping the
/// step before it.
///
/// The result approaches the balance point from below, so it never
/// overstates the heat available.
fn find_equilibrium(
    params: &ModelParameters,
    dwelling: &Dwelling,
    external_c: f64,
    pinned_mean_water_c: f64,
) -> ModelResult<Equilibrium> {
    let rooms_a = dwelling.rooms_per_class();
    let outside_loss_b_w = dwelling.half_heat_loss_w(SETBACK_ROOM_TEMPERATURE_C, external_c);

    let mut previous: Option<Equilibrium> = None;
    for step in 0..=scan_steps() {
        let temp_a_c = SETBACK_ROOM_TEMPERATURE_C + step as f64 * EQUILIBRIUM_SCAN_STEP_K;

        let outside_loss_a_w = dwelling.half_heat_loss_w(temp_a_c, external_c);
        let internal_loss_w = rooms_a * dwelling.internal_loss_per_a_w(params, temp_a_c)?;
        let radiator_output_w = rooms_a * radiator_output_at_w(pinned_mean_water_c, temp_a_c);
        let excess_w = radiator_output_w - (outside_loss_a_w + internal_loss_w);

        if excess_w < 0.0 {
            return previous.ok_or(ModelError::EquilibriumNotFound { external_c });
        }
        previous = Some(Equilibrium {
            temperature_a_c: temp_a_c,
            home_heat_loss_w: outside_loss_a_w + outside_loss_b_w,
        });
    }

    Err(ModelError::EquilibriumNotFound { external_c })
}
