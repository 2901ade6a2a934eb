//! Demand value types and the enumerable configuration axes of the model.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::constants::{HOME_TOTAL_EXTERNAL_WALL_AREA_M2, NORMAL_ROOM_TEMPERATURE_C, ROOMS_PER_STOREY};

/// Heat demand and the heat-pump electricity needed to meet it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeatAndElectricityDemand {
    /// Whole-home heat demand (W).
    pub heat_demand_w: f64,
    /// Heat-pump electrical input (W).
    pub heat_pump_electricity_w: f64,
}

impl HeatAndElectricityDemand {
    pub fn new(heat_demand_w: f64, heat_pump_electricity_w: f64) -> Self {
        Self {
            heat_demand_w,
            heat_pump_electricity_w,
        }
    }
}

/// Demand with every room at normal temperature, and with the B rooms set back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DemandWithoutAndWithSetback {
    pub no_setback: HeatAndElectricityDemand,
    pub with_setback: HeatAndElectricityDemand,
}

impl DemandWithoutAndWithSetback {
    pub fn new(no_setback: HeatAndElectricityDemand, with_setback: HeatAndElectricityDemand) -> Self {
        Self {
            no_setback,
            with_setback,
        }
    }

    /// True if setting back the B rooms raises heat-pump electricity demand.
    pub fn setback_raises_electricity(&self) -> bool {
        self.with_setback.heat_pump_electricity_w > self.no_setback.heat_pump_electricity_w
    }
}

/// Soft-regulation result: demand plus the A-room temperature it settled at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftDemand {
    pub demand: DemandWithoutAndWithSetback,
    /// A-room equilibrium temperature with the B rooms set back (C).
    pub equilibrium_temperature_a_c: f64,
}

impl SoftDemand {
    /// How far the A rooms sag below normal temperature (K).
    pub fn temperature_sag_k(&self) -> f64 {
        NORMAL_ROOM_TEMPERATURE_C - self.equilibrium_temperature_a_c
    }
}

/// Dwelling shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Four rooms on one storey.
    #[default]
    Bungalow,
    /// Eight rooms over two storeys with the same footprint.
    Detached,
}

impl Archetype {
    pub fn storeys(self) -> usize {
        match self {
            Archetype::Bungalow => 1,
            Archetype::Detached => 2,
        }
    }

    pub fn room_count(self) -> usize {
        ROOMS_PER_STOREY * self.storeys()
    }

    pub fn is_two_storey(self) -> bool {
        self.storeys() == 2
    }

    /// External wall area over all storeys (m^2).
    pub fn external_wall_area_m2(self) -> f64 {
        HOME_TOTAL_EXTERNAL_WALL_AREA_M2 * self.storeys() as f64
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Archetype::Bungalow => write!(f, "bungalow"),
            Archetype::Detached => write!(f, "detached"),
        }
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bungalow" => Ok(Archetype::Bungalow),
            "detached" => Ok(Archetype::Detached),
            other => Err(format!("unknown archetype \"{other}\", expected bungalow or detached")),
        }
    }
}

/// How the A rooms are held at temperature while the B rooms are set back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regulation {
    /// Radiators driven as hard as needed to hold 21 C in the A rooms.
    #[default]
    Stiff,
    /// Flow temperature stays at its weather-compensated value; A rooms sag.
    Soft,
}

impl fmt::Display for Regulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regulation::Stiff => write!(f, "stiff"),
            Regulation::Soft => write!(f, "soft"),
        }
    }
}

impl FromStr for Regulation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stiff" => Ok(Regulation::Stiff),
            "soft" => Ok(Regulation::Soft),
            other => Err(format!("unknown regulation \"{other}\", expected stiff or soft")),
        }
    }
}
