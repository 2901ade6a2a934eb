//! Validated configuration bundle for one model run.

use crate::error::{ModelError, ModelResult};

use super::constants::EXTERNAL_AIR_TEMPERATURE_C;

/// Parameters for one evaluation of the model.
///
/// Immutable once built. The `Default` value reproduces the published
/// worked example; [`ModelParameters::fixes_applied`] corrects the door
/// count and the flow vs mean-water mix-up.
///
/// # Examples
///
/// ```
/// use trv_setback::model::params::ModelParameters;
///
/// let params = ModelParameters::fixes_applied().with_external_temperature(5.0);
/// assert_eq!(params.external_air_temperature_c(), 5.0);
/// assert_eq!(params.doors_per_internal_wall(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    doors_per_internal_wall: f64,
    correct_cop_for_flow_vs_mw: bool,
    rooms_alternating_abab: bool,
    external_air_temperature_c: f64,
}

impl ModelParameters {
    /// Doors per internal wall in the published calculation (the text says 1).
    pub const DEFAULT_DOORS_PER_INTERNAL_WALL: f64 = 0.5;
    /// Doors per internal wall with the published inconsistency fixed.
    pub const FIXED_DOORS_PER_INTERNAL_WALL: f64 = 1.0;
    pub const DEFAULT_CORRECT_COP_FOR_FLOW_TEMPERATURE: bool = false;
    pub const FIXED_CORRECT_COP_FOR_FLOW_TEMPERATURE: bool = true;
    pub const DEFAULT_ARRANGEMENT_ABAB: bool = true;

    /// Creates a validated parameter set.
    ///
    /// # Arguments
    ///
    /// * `doors_per_internal_wall` - Doors in each internal A-B wall (finite, >= 0)
    /// * `correct_cop_for_flow_vs_mw` - Add the flow vs mean-water offset before CoP
    /// * `rooms_alternating_abab` - `true` for ABAB layout, `false` for AABB
    /// * `external_air_temperature_c` - Outside air temperature (finite)
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidParameter` for a non-finite or negative
    /// door count, or a non-finite external temperature.
    pub fn new(
        doors_per_internal_wall: f64,
        correct_cop_for_flow_vs_mw: bool,
        rooms_alternating_abab: bool,
        external_air_temperature_c: f64,
    ) -> ModelResult<Self> {
        if !doors_per_internal_wall.is_finite() || doors_per_internal_wall < 0.0 {
            return Err(ModelError::InvalidParameter {
                field: "doors_per_internal_wall",
                value: doors_per_internal_wall,
            });
        }
        if !external_air_temperature_c.is_finite() {
            return Err(ModelError::InvalidParameter {
                field: "external_air_temperature_c",
                value: external_air_temperature_c,
            });
        }
        Ok(Self {
            doors_per_internal_wall,
            correct_cop_for_flow_vs_mw,
            rooms_alternating_abab,
            external_air_temperature_c,
        })
    }

    /// Door count and CoP flow temperature fixed, ABAB layout, design temperature.
    pub fn fixes_applied() -> Self {
        Self {
            doors_per_internal_wall: Self::FIXED_DOORS_PER_INTERNAL_WALL,
            correct_cop_for_flow_vs_mw: Self::FIXED_CORRECT_COP_FOR_FLOW_TEMPERATURE,
            rooms_alternating_abab: Self::DEFAULT_ARRANGEMENT_ABAB,
            external_air_temperature_c: EXTERNAL_AIR_TEMPERATURE_C,
        }
    }

    /// As [`ModelParameters::fixes_applied`] but with the AABB layout.
    pub fn fixes_and_aabb() -> Self {
        Self {
            rooms_alternating_abab: !Self::DEFAULT_ARRANGEMENT_ABAB,
            ..Self::fixes_applied()
        }
    }

    /// Returns a copy with the external air temperature replaced.
    ///
    /// A non-finite temperature is not rejected here; every solver entry
    /// point refuses it through its domain check.
    pub fn with_external_temperature(&self, external_air_temperature_c: f64) -> Self {
        Self {
            external_air_temperature_c,
            ..*self
        }
    }

    /// Returns a copy with the room layout replaced.
    pub fn with_rooms_alternating_abab(&self, rooms_alternating_abab: bool) -> Self {
        Self {
            rooms_alternating_abab,
            ..*self
        }
    }

    pub fn doors_per_internal_wall(&self) -> f64 {
        self.doors_per_internal_wall
    }

    pub fn correct_cop_for_flow_vs_mw(&self) -> bool {
        self.correct_cop_for_flow_vs_mw
    }

    pub fn rooms_alternating_abab(&self) -> bool {
        self.rooms_alternating_abab
    }

    pub fn external_air_temperature_c(&self) -> f64 {
        self.external_air_temperature_c
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            doors_per_internal_wall: Self::DEFAULT_DOORS_PER_INTERNAL_WALL,
            correct_cop_for_flow_vs_mw: Self::DEFAULT_CORRECT_COP_FOR_FLOW_TEMPERATURE,
            rooms_alternating_abab: Self::DEFAULT_ARRANGEMENT_ABAB,
            external_air_temperature_c: EXTERNAL_AIR_TEMPERATURE_C,
        }
    }
}
