//! Whole-home figures shared by the stiff and soft solvers.

use crate::error::{ModelError, ModelResult};

use super::constants::{
    HOME_EFFECTIVE_EXTERNAL_WALL_AND_ROOF_U_W_PER_M2K, HOME_HEAT_LOSS_PER_KELVIN_W_PER_K,
    HOME_TOTAL_ROOF_AREA_M2, NORMAL_ROOM_TEMPERATURE_C, SETBACK_ROOM_TEMPERATURE_C,
};
use super::params::ModelParameters;
use super::physics::{if_heat_loss_per_a_2storey_w, iw_heat_loss_per_a_w, no_setback_a_mean_water_c};
use super::types::Archetype;

/// Heat-loss geometry of one dwelling shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dwelling {
    /// Whole-home heat loss to outside per Kelvin (W/K).
    pub heat_loss_per_kelvin_w_per_k: f64,
    /// Number of rooms, half A and half B.
    pub room_count: usize,
    pub two_storey: bool,
}

impl Dwelling {
    /// The published four-room bungalow, using its stated heat loss directly.
    pub fn reference_bungalow() -> Self {
        Self {
            heat_loss_per_kelvin_w_per_k: HOME_HEAT_LOSS_PER_KELVIN_W_PER_K,
            room_count: Archetype::Bungalow.room_count(),
            two_storey: false,
        }
    }

    /// Builds the heat loss from roof and external wall areas.
    ///
    /// The effective U value derived from the reference bungalow is held the
    /// same for every archetype.
    pub fn from_areas(archetype: Archetype) -> Self {
        let area_m2 = HOME_TOTAL_ROOF_AREA_M2 + archetype.external_wall_area_m2();
        Self {
            heat_loss_per_kelvin_w_per_k: area_m2 * HOME_EFFECTIVE_EXTERNAL_WALL_AND_ROOF_U_W_PER_M2K,
            room_count: archetype.room_count(),
            two_storey: archetype.is_two_storey(),
        }
    }

    /// Rooms held at normal temperature (and, separately, rooms set back).
    pub fn rooms_per_class(&self) -> f64 {
        (self.room_count / 2) as f64
    }

    /// Whole-home heat loss with every room at `room_c` (W).
    pub fn heat_loss_w(&self, room_c: f64, external_c: f64) -> f64 {
        (room_c - external_c) * self.heat_loss_per_kelvin_w_per_k
    }

    /// Heat loss to outside from the A half (or B half) of the home at `room_c` (W).
    pub fn half_heat_loss_w(&self, room_c: f64, external_c: f64) -> f64 {
        self.heat_loss_w(room_c, external_c) / 2.0
    }

    /// Radiator output per room with no setback: current demand spread evenly (W).
    pub fn ref_radiator_output_w(&self, external_c: f64) -> f64 {
        self.heat_loss_w(NORMAL_ROOM_TEMPERATURE_C, external_c) / self.room_count as f64
    }

    /// Radiator mean-water temperature with no setback (C).
    pub fn no_setback_mean_water_c(&self, external_c: f64) -> f64 {
        no_setback_a_mean_water_c(self.ref_radiator_output_w(external_c))
    }

    /// Heat lost from one A room at `temp_a_c` to the set-back B rooms (W).
    pub fn internal_loss_per_a_w(&self, params: &ModelParameters, temp_a_c: f64) -> ModelResult<f64> {
        Ok(iw_heat_loss_per_a_w(params, temp_a_c)?
            + if_heat_loss_per_a_2storey_w(params, temp_a_c, self.two_storey)?)
    }
}

/// Refuses external temperatures at which the heat-flow assumptions invert.
///
/// # Errors
///
/// Returns `ModelError::OutsideDomain` unless the external temperature is
/// strictly below the setback temperature.
pub fn check_domain(params: &ModelParameters) -> ModelResult<f64> {
    let external_c = params.external_air_temperature_c();
    if external_c.is_nan() || external_c >= SETBACK_ROOM_TEMPERATURE_C {
        return Err(ModelError::OutsideDomain {
            external_c,
            setback_c: SETBACK_ROOM_TEMPERATURE_C,
        });
    }
    Ok(external_c)
}
