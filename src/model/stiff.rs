//! Stiff regulation: every radiator is driven as hard as its room needs.
//!
//! With the B rooms set back the A radiators must also cover the extra loss
//! into the B rooms, which raises the mean-water (and flow) temperature the
//! heat pump has to supply and lowers its CoP.

use tracing::trace;

use crate::error::ModelResult;

use super::constants::{MEAN_HOME_TEMPERATURE_WITH_SETBACK_C, NORMAL_ROOM_TEMPERATURE_C};
use super::dwelling::{Dwelling, check_domain};
use super::params::ModelParameters;
use super::physics::{flow_temperature_c, heat_pump_electricity_w, setback_a_mean_water_c};
use super::types::{Archetype, DemandWithoutAndWithSetback, HeatAndElectricityDemand};

/// Heat and electricity demand for `archetype`, without and with setback.
///
/// # Errors
///
/// Returns `ModelError::OutsideDomain` if it is not colder outside than the
/// setback rooms, or `ModelError::NonPhysicalCoP` if an extrapolated CoP is
/// not positive.
pub fn compute_demand_w(
    params: &ModelParameters,
    archetype: Archetype,
) -> ModelResult<DemandWithoutAndWithSetback> {
    match archetype {
        Archetype::Bungalow => compute_bungalow_demand_w(params),
        Archetype::Detached => compute_detached_demand_w(params, false),
    }
}

/// Demand for the published four-room bungalow.
pub fn compute_bungalow_demand_w(params: &ModelParameters) -> ModelResult<DemandWithoutAndWithSetback> {
    demand_for(params, &Dwelling::reference_bungalow())
}

/// Demand for the eight-room detached house, or, with `as_bungalow`, for the
/// same geometry cut down to one storey of four rooms.
///
/// Run as a bungalow this must agree with [`compute_bungalow_demand_w`].
pub fn compute_detached_demand_w(
    params: &ModelParameters,
    as_bungalow: bool,
) -> ModelResult<DemandWithoutAndWithSetback> {
    let archetype = if as_bungalow {
        Archetype::Bungalow
    } else {
        Archetype::Detached
    };
    demand_for(params, &Dwelling::from_areas(archetype))
}

fn demand_for(params: &ModelParameters, dwelling: &Dwelling) -> ModelResult<DemandWithoutAndWithSetback> {
    let external_c = check_domain(params)?;

    let heat_no_setback_w = dwelling.heat_loss_w(NORMAL_ROOM_TEMPERATURE_C, external_c);
    let heat_setback_w = dwelling.heat_loss_w(MEAN_HOME_TEMPERATURE_WITH_SETBACK_C, external_c);

    let ref_radiator_output_w = dwelling.ref_radiator_output_w(external_c);
    let internal_loss_per_a_w = dwelling.internal_loss_per_a_w(params, NORMAL_ROOM_TEMPERATURE_C)?;

    let mw_no_setback_c = dwelling.no_setback_mean_water_c(external_c);
    let mw_setback_c = setback_a_mean_water_c(ref_radiator_output_w, internal_loss_per_a_w);

    let elec_no_setback_w =
        heat_pump_electricity_w(heat_no_setback_w, flow_temperature_c(params, mw_no_setback_c))?;
    let elec_setback_w =
        heat_pump_electricity_w(heat_setback_w, flow_temperature_c(params, mw_setback_c))?;

    trace!(
        external_c,
        mw_no_setback_c, mw_setback_c, elec_no_setback_w, elec_setback_w, "stiff demand"
    );

    Ok(DemandWithoutAndWithSetback::new(
        HeatAndElectricityDemand::new(heat_no_setback_w, elec_no_setback_w),
        HeatAndElectricityDemand::new(heat_setback_w, elec_setback_w),
    ))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::ModelError;
    use crate::model::constants::{
        HEAT_PUMP_POWER_IN_B_SETBACK_W, HEAT_PUMP_POWER_IN_NO_SETBACK_W,
        HOME_HEAT_LOSS_AT_NORMAL_ROOM_TEMPERATURE_W, HOME_HEAT_LOSS_B_SETBACK_W,
    };

    #[test]
    fn reference_scenario_reproduces_published_figures() {
        let d = compute_bungalow_demand_w(&ModelParameters::default()).unwrap();
        assert_abs_diff_eq!(d.no_setback.heat_demand_w, 2000.0, epsilon = 1e-6);
        assert!(d.with_setback.heat_demand_w > 1874.0 && d.with_setback.heat_demand_w < 1876.0);
        assert_abs_diff_eq!(d.no_setback.heat_pump_electricity_w, 769.0, epsilon = 0.5);
        assert_abs_diff_eq!(d.with_setback.heat_pump_electricity_w, 815.0, epsilon = 0.5);
        assert!(d.setback_raises_electricity());
    }

    #[test]
    fn detached_as_bungalow_matches_published_constants() {
        let d = compute_detached_demand_w(&ModelParameters::default(), true).unwrap();
        assert_abs_diff_eq!(d.no_setback.heat_demand_w, HOME_HEAT_LOSS_AT_NORMAL_ROOM_TEMPERATURE_W, epsilon = 1.0);
        assert_abs_diff_eq!(d.with_setback.heat_demand_w, HOME_HEAT_LOSS_B_SETBACK_W, epsilon = 1.0);
        assert_abs_diff_eq!(d.no_setback.heat_pump_electricity_w, HEAT_PUMP_POWER_IN_NO_SETBACK_W, epsilon = 1.0);
        assert_abs_diff_eq!(d.with_setback.heat_pump_electricity_w, HEAT_PUMP_POWER_IN_B_SETBACK_W, epsilon = 1.0);
    }

    #[test]
    fn setback_raises_demand_when_cold_and_lowers_it_when_mild() {
        let fixed = ModelParameters::fixes_applied();
        let cold = compute_bungalow_demand_w(&fixed.with_external_temperature(0.0)).unwrap();
        let mild = compute_bungalow_demand_w(&fixed.with_external_temperature(14.0)).unwrap();
        assert!(cold.setback_raises_electricity());
        assert!(!mild.setback_raises_electricity());
    }

    #[test]
    fn setback_always_lowers_heat_demand() {
        let d = compute_demand_w(&ModelParameters::fixes_applied(), Archetype::Detached).unwrap();
        assert!(d.with_setback.heat_demand_w < d.no_setback.heat_demand_w);
    }

    #[test]
    fn refuses_external_temperature_at_setback() {
        let p = ModelParameters::default().with_external_temperature(18.0);
        assert!(matches!(
            compute_bungalow_demand_w(&p),
            Err(ModelError::OutsideDomain { .. })
        ));
        assert!(compute_detached_demand_w(&p, false).is_err());
    }
}
