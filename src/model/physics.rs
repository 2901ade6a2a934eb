//! Closed-form building blocks: internal conductances, the radiator
//! power/temperature characteristic, and heat-pump CoP.

use crate::error::{ModelError, ModelResult};

use super::constants::{
    COP_AT_46P0C, COP_AT_51P5C, COP_HIGH_FLOW_TEMPERATURE_C, COP_LOW_FLOW_TEMPERATURE_C,
    FLOW_VS_MEAN_WATER_OFFSET_K, INTERNAL_DOOR_AREA_PER_DOOR_M2, INTERNAL_DOOR_U_W_PER_M2K,
    INTERNAL_FLOOR_U_W_PER_M2K, INTERNAL_WALL_AREA_FROM_EACH_A_TO_B_ROOM_M2,
    INTERNAL_WALL_U_W_PER_M2K, INTERNAL_WALLS_FROM_EACH_A_ROOM, NORMAL_ROOM_TEMPERATURE_C,
    PER_ROOM_FLOOR_AREA_M2, RADIATOR_EXP_POWER_TO_DT,
    RADIATOR_MWATDT_AT_NORMAL_ROOM_TEMPERATURE_K,
    RADIATOR_POWER_WITH_HOME_AT_NORMAL_ROOM_TEMPERATURE_W, SETBACK_ROOM_TEMPERATURE_C,
};
use super::params::ModelParameters;

/// Internal A-to-B heat loss multiplier for the room layout.
///
/// In AABB each A room adjoins one B room rather than two.
pub fn layout_multiplier(params: &ModelParameters) -> f64 {
    if params.rooms_alternating_abab() { 1.0 } else { 0.5 }
}

fn check_a_temperature(temp_a_c: f64) -> ModelResult<f64> {
    if temp_a_c.is_nan() || temp_a_c < SETBACK_ROOM_TEMPERATURE_C {
        return Err(ModelError::Precondition {
            what: "A-room temperature below setback temperature",
            value: temp_a_c,
        });
    }
    Ok(temp_a_c - SETBACK_ROOM_TEMPERATURE_C)
}

/// Heat lost from one A room through internal walls and doors to B rooms (W).
///
/// Each A room has two internal walls to B rooms, so it has
/// `2 * doors_per_internal_wall` doors; door area is taken out of the wall
/// area. The layout multiplier applies to the wall and door loss together.
///
/// # Errors
///
/// Returns `ModelError::Precondition` if `temp_a_c` is below the setback
/// temperature.
pub fn iw_heat_loss_per_a_w(params: &ModelParameters, temp_a_c: f64) -> ModelResult<f64> {
    let delta_k = check_a_temperature(temp_a_c)?;
    let doors = INTERNAL_WALLS_FROM_EACH_A_ROOM * params.doors_per_internal_wall();
    let door_area_m2 = doors * INTERNAL_DOOR_AREA_PER_DOOR_M2;

    let wall_w_per_k =
        (INTERNAL_WALL_AREA_FROM_EACH_A_TO_B_ROOM_M2 - door_area_m2) * INTERNAL_WALL_U_W_PER_M2K;
    let door_w_per_k = door_area_m2 * INTERNAL_DOOR_U_W_PER_M2K;

    Ok(layout_multiplier(params) * (wall_w_per_k * delta_k + door_w_per_k * delta_k))
}

/// Heat lost from one A room through its floor or ceiling to a B room (W).
///
/// Only a two-storey home in the ABAB layout puts a B room above or below
/// each A room; otherwise this is zero.
///
/// # Errors
///
/// Returns `ModelError::Precondition` if `temp_a_c` is below the setback
/// temperature.
pub fn if_heat_loss_per_a_2storey_w(
    params: &ModelParameters,
    temp_a_c: f64,
    two_storey: bool,
) -> ModelResult<f64> {
    let delta_k = check_a_temperature(temp_a_c)?;
    if !(params.rooms_alternating_abab() && two_storey) {
        return Ok(0.0);
    }
    Ok(PER_ROOM_FLOOR_AREA_M2 * INTERNAL_FLOOR_U_W_PER_M2K * delta_k)
}

/// Mean-water temperature needed for a radiator to deliver `output_w` into a
/// room at normal temperature (C).
fn mean_water_for_output_c(output_w: f64) -> f64 {
    let power_uplift = output_w / RADIATOR_POWER_WITH_HOME_AT_NORMAL_ROOM_TEMPERATURE_W;
    let dt_uplift = power_uplift.powf(RADIATOR_EXP_POWER_TO_DT);
    NORMAL_ROOM_TEMPERATURE_C + RADIATOR_MWATDT_AT_NORMAL_ROOM_TEMPERATURE_K * dt_uplift
}

/// A-room radiator mean-water temperature with the B rooms set back (C).
///
/// The A radiator has to cover the room's own share of whole-home loss plus
/// what now leaks into the cooler B rooms.
pub fn setback_a_mean_water_c(ref_radiator_output_w: f64, internal_loss_per_a_w: f64) -> f64 {
    mean_water_for_output_c(ref_radiator_output_w + internal_loss_per_a_w)
}

/// A-room radiator mean-water temperature with no setback (C).
pub fn no_setback_a_mean_water_c(ref_radiator_output_w: f64) -> f64 {
    mean_water_for_output_c(ref_radiator_output_w)
}

/// Output of one radiator with mean water at `mean_water_c` into a room at
/// `room_c` (W).
///
/// Delta T and output are both measured against the rated point (DT25 at
/// 500 W). The inverted power-to-delta-T exponent is applied and the result
/// is scaled once more by the delta-T ratio.
pub fn radiator_output_at_w(mean_water_c: f64, room_c: f64) -> f64 {
    let dt_ratio = (mean_water_c - room_c) / RADIATOR_MWATDT_AT_NORMAL_ROOM_TEMPERATURE_K;
    RADIATOR_POWER_WITH_HOME_AT_NORMAL_ROOM_TEMPERATURE_W
        * dt_ratio.powf(1.0 / RADIATOR_EXP_POWER_TO_DT)
        * dt_ratio
}

/// Heat-pump flow temperature for a radiator mean-water temperature (C).
pub fn flow_temperature_c(params: &ModelParameters, mean_water_c: f64) -> f64 {
    if params.correct_cop_for_flow_vs_mw() {
        mean_water_c + FLOW_VS_MEAN_WATER_OFFSET_K
    } else {
        mean_water_c
    }
}

/// Heat-pump CoP at a flow temperature.
///
/// Straight line through the two reference points, extrapolated at the same
/// slope beyond them. Not bounded: far enough out it goes non-physical.
pub fn compute_flow_cop(flow_temperature_c: f64) -> f64 {
    let slope = (COP_AT_51P5C - COP_AT_46P0C) / (COP_HIGH_FLOW_TEMPERATURE_C - COP_LOW_FLOW_TEMPERATURE_C);
    COP_AT_46P0C + slope * (flow_temperature_c - COP_LOW_FLOW_TEMPERATURE_C)
}

/// Heat-pump electrical input to deliver `heat_w` at a flow temperature (W).
///
/// # Errors
///
/// Returns `ModelError::NonPhysicalCoP` if the extrapolated CoP is not a
/// positive finite number.
pub fn heat_pump_electricity_w(heat_w: f64, flow_temperature_c: f64) -> ModelResult<f64> {
    let cop = compute_flow_cop(flow_temperature_c);
    if !cop.is_finite() || cop <= 0.0 {
        return Err(ModelError::NonPhysicalCoP {
            flow_c: flow_temperature_c,
            cop,
        });
    }
    Ok(heat_w / cop)
}

/// Radiator output in each B room with setback, after the A rooms' share (W).
///
/// Negative means the B rooms are warmed past setback by the A rooms alone.
pub fn b_radiator_output_with_setback_w(
    home_heat_loss_setback_w: f64,
    a_radiator_output_w: f64,
    room_count: usize,
) -> f64 {
    let rooms_per_class = (room_count / 2) as f64;
    (home_heat_loss_setback_w - rooms_per_class * a_radiator_output_w) / rooms_per_class
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn cop_reproduces_reference_points() {
        assert_abs_diff_eq!(compute_flow_cop(46.0), 2.6, epsilon = 0.01);
        assert_abs_diff_eq!(compute_flow_cop(51.5), 2.3, epsilon = 0.01);
    }

    #[test]
    fn cop_interpolates_between_reference_points() {
        let mid = compute_flow_cop(50.0);
        assert!(mid < 2.6);
        assert!(mid > 2.3);
    }

    #[test]
    fn cop_extrapolates_monotonically() {
        assert!(compute_flow_cop(40.0) > 2.6);
        assert!(compute_flow_cop(55.0) < 2.3);
        assert!(compute_flow_cop(35.0) > compute_flow_cop(40.0));
    }

    #[test]
    fn reference_internal_loss_is_146_4_w() {
        // 16.4 m^2 wall at 2 W/m^2K plus one 2 m^2 door at 8 W/m^2K, over 3 K.
        let loss = iw_heat_loss_per_a_w(&ModelParameters::default(), 21.0).unwrap();
        assert_abs_diff_eq!(loss, 146.4, epsilon = 1e-9);
    }

    #[test]
    fn aabb_halves_wall_and_door_loss_together() {
        let abab = iw_heat_loss_per_a_w(&ModelParameters::fixes_applied(), 21.0).unwrap();
        let aabb = iw_heat_loss_per_a_w(&ModelParameters::fixes_and_aabb(), 21.0).unwrap();
        assert_abs_diff_eq!(aabb, abab * 0.5, epsilon = 1e-9);
        // Fixed doors: 14.4 m^2 wall * 2 + 4 m^2 door * 8 = 60.8 W/K.
        assert_abs_diff_eq!(abab, 60.8 * 3.0, epsilon = 1e-9);
    }

    #[test]
    fn internal_loss_is_zero_at_setback_temperature() {
        let p = ModelParameters::fixes_applied();
        assert_eq!(iw_heat_loss_per_a_w(&p, 18.0).unwrap(), 0.0);
        assert_eq!(if_heat_loss_per_a_2storey_w(&p, 18.0, true).unwrap(), 0.0);
    }

    #[test]
    fn internal_loss_rejects_temperature_below_setback() {
        let p = ModelParameters::default();
        assert!(matches!(
            iw_heat_loss_per_a_w(&p, 17.9),
            Err(ModelError::Precondition { .. })
        ));
        assert!(if_heat_loss_per_a_2storey_w(&p, 17.0, true).is_err());
        assert!(iw_heat_loss_per_a_w(&p, f64::NAN).is_err());
    }

    #[test]
    fn floor_loss_only_for_two_storey_abab() {
        let abab = ModelParameters::fixes_applied();
        let aabb = ModelParameters::fixes_and_aabb();
        assert_abs_diff_eq!(
            if_heat_loss_per_a_2storey_w(&abab, 21.0, true).unwrap(),
            16.0 * 2.0 * 3.0,
            epsilon = 1e-9
        );
        assert_eq!(if_heat_loss_per_a_2storey_w(&abab, 21.0, false).unwrap(), 0.0);
        assert_eq!(if_heat_loss_per_a_2storey_w(&aabb, 21.0, true).unwrap(), 0.0);
    }

    #[test]
    fn no_setback_mean_water_at_rated_output_is_46() {
        assert_abs_diff_eq!(no_setback_a_mean_water_c(500.0), 46.0, epsilon = 1e-9);
    }

    #[test]
    fn setback_mean_water_in_reference_case() {
        let mw = setback_a_mean_water_c(500.0, 146.4);
        assert_abs_diff_eq!(mw, 51.47, epsilon = 0.05);
    }

    #[test]
    fn radiator_output_at_rated_point() {
        // DT25 gives the rated 500 W.
        assert_abs_diff_eq!(radiator_output_at_w(46.0, 21.0), 500.0, epsilon = 1e-9);
        assert!(radiator_output_at_w(46.0, 18.0) > 500.0);
    }

    #[test]
    fn radiator_output_falls_faster_than_delta_t() {
        // Half the rated delta T: 0.5^(1/0.77 + 1) of rated output.
        let half = radiator_output_at_w(33.5, 21.0);
        assert_abs_diff_eq!(half, 500.0 * 0.5_f64.powf(1.0 / 0.77 + 1.0), epsilon = 1e-9);
        assert!(half < 250.0);
    }

    #[test]
    fn flow_offset_only_when_corrected() {
        assert_eq!(flow_temperature_c(&ModelParameters::default(), 46.0), 46.0);
        assert_eq!(flow_temperature_c(&ModelParameters::fixes_applied(), 46.0), 48.5);
    }

    #[test]
    fn electricity_rejects_non_positive_cop() {
        assert!(heat_pump_electricity_w(1000.0, 46.0).is_ok());
        assert!(matches!(
            heat_pump_electricity_w(1000.0, 200.0),
            Err(ModelError::NonPhysicalCoP { .. })
        ));
    }

    #[test]
    fn b_radiator_output_in_reference_case() {
        // (1875 - 2 * 646.4) / 2
        let b = b_radiator_output_with_setback_w(1875.0, 646.4, 4);
        assert_abs_diff_eq!(b, 291.1, epsilon = 1e-9);
    }
}
