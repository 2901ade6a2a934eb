//! Scenario files (TOML) and the built-in presets that mirror the
//! published example and its corrections.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::constants::{
    DEFAULT_BASE_HEATING_TEMPERATURE_C, EXTERNAL_AIR_TEMPERATURE_C, SETBACK_ROOM_TEMPERATURE_C,
};
use crate::model::{Archetype, ModelParameters, Regulation};
use crate::sim::{EngineOptions, MeanBasis};
use crate::weather::SyntheticWeather;

/// A complete scenario: model parameters, run options, synthetic weather.
///
/// All fields have defaults matching the published reference scenario. Load
/// from TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::reference`] for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Model parameters.
    #[serde(default)]
    pub model: ModelConfig,
    /// Archetype, regulation and hourly driver settings.
    #[serde(default)]
    pub run: RunConfig,
    /// Synthetic weather used when no temperature file is given.
    #[serde(default)]
    pub synthetic: SyntheticConfig,
}

/// Model parameters, as in [`ModelParameters`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Doors in each internal A-B wall (>= 0).
    pub doors_per_internal_wall: f64,
    /// Add the flow vs mean-water offset before looking up CoP.
    pub correct_cop_for_flow_vs_mw: bool,
    /// `true` for the ABAB layout, `false` for AABB.
    pub rooms_alternating_abab: bool,
    /// External temperature for single-point reports (C, below setback).
    pub external_air_temperature_c: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            doors_per_internal_wall: ModelParameters::DEFAULT_DOORS_PER_INTERNAL_WALL,
            correct_cop_for_flow_vs_mw: ModelParameters::DEFAULT_CORRECT_COP_FOR_FLOW_TEMPERATURE,
            rooms_alternating_abab: ModelParameters::DEFAULT_ARRANGEMENT_ABAB,
            external_air_temperature_c: EXTERNAL_AIR_TEMPERATURE_C,
        }
    }
}

impl ModelConfig {
    fn fixes_applied() -> Self {
        Self {
            doors_per_internal_wall: ModelParameters::FIXED_DOORS_PER_INTERNAL_WALL,
            correct_cop_for_flow_vs_mw: ModelParameters::FIXED_CORRECT_COP_FOR_FLOW_TEMPERATURE,
            ..Self::default()
        }
    }
}

/// Archetype, regulation and hourly driver settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// `"bungalow"` or `"detached"`.
    pub archetype: Archetype,
    /// `"stiff"` or `"soft"`.
    pub regulation: Regulation,
    /// Hours at or above this temperature are skipped (C).
    pub heating_threshold_c: f64,
    /// `"heating_hours"` or `"all_hours"`.
    pub mean_basis: MeanBasis,
    /// degreedays.net hourly CSV; synthetic weather is used when absent.
    pub temperatures: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            archetype: Archetype::default(),
            regulation: Regulation::default(),
            heating_threshold_c: DEFAULT_BASE_HEATING_TEMPERATURE_C,
            mean_basis: MeanBasis::default(),
            temperatures: None,
        }
    }
}

/// Synthetic weather parameters, as in [`SyntheticWeather`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyntheticConfig {
    /// Number of days to generate (> 0).
    pub days: usize,
    /// Annual mean temperature (C).
    pub mean_c: f64,
    /// Annual cycle amplitude (K).
    pub annual_amplitude_k: f64,
    /// Daily cycle amplitude (K).
    pub diurnal_amplitude_k: f64,
    /// Hourly noise standard deviation (K, >= 0).
    pub noise_std_k: f64,
    /// Random seed.
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        let w = SyntheticWeather::default();
        Self {
            days: w.days,
            mean_c: w.mean_c,
            annual_amplitude_k: w.annual_amplitude_k,
            diurnal_amplitude_k: w.diurnal_amplitude_k,
            noise_std_k: w.noise_std_k,
            seed: w.seed,
        }
    }
}

impl SyntheticConfig {
    pub fn weather(&self) -> SyntheticWeather {
        SyntheticWeather {
            days: self.days,
            mean_c: self.mean_c,
            annual_amplitude_k: self.annual_amplitude_k,
            diurnal_amplitude_k: self.diurnal_amplitude_k,
            noise_std_k: self.noise_std_k,
            seed: self.seed,
        }
    }
}

/// A rejected config value, named by its dotted field path.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"model.doors_per_internal_wall"`).
    pub field: String,
    /// What the value must satisfy.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the published worked example: 0.5 doors per wall, no flow
    /// temperature correction, ABAB bungalow, stiff regulation.
    pub fn reference() -> Self {
        Self::default()
    }

    /// Returns the reference scenario with the door count and CoP flow
    /// temperature corrected.
    pub fn fixes_applied() -> Self {
        Self {
            model: ModelConfig::fixes_applied(),
            ..Self::default()
        }
    }

    /// Returns the corrected scenario with the AABB layout.
    pub fn fixes_aabb() -> Self {
        Self {
            model: ModelConfig {
                rooms_alternating_abab: false,
                ..ModelConfig::fixes_applied()
            },
            ..Self::default()
        }
    }

    /// Returns the corrected scenario with soft A-room regulation.
    pub fn fixes_soft() -> Self {
        Self {
            model: ModelConfig::fixes_applied(),
            run: RunConfig {
                regulation: Regulation::Soft,
                ..RunConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the corrected scenario for the two-storey detached house.
    pub fn detached() -> Self {
        Self {
            model: ModelConfig::fixes_applied(),
            run: RunConfig {
                archetype: Archetype::Detached,
                ..RunConfig::default()
            },
            ..Self::default()
        }
    }

    /// Names accepted by [`ScenarioConfig::from_preset`].
    pub const PRESETS: &[&str] = &["reference", "fixes_applied", "fixes_aabb", "fixes_soft", "detached"];

    /// Looks up a built-in scenario by name.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "reference" => Ok(Self::reference()),
            "fixes_applied" => Ok(Self::fixes_applied()),
            "fixes_aabb" => Ok(Self::fixes_aabb()),
            "fixes_soft" => Ok(Self::fixes_soft()),
            "detached" => Ok(Self::detached()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Reads and parses a scenario file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Checks every field, collecting all problems rather than stopping at the first.
    ///
    /// An empty vector means the scenario can be run.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let m = &self.model;

        if !m.doors_per_internal_wall.is_finite() || m.doors_per_internal_wall < 0.0 {
            errors.push(ConfigError {
                field: "model.doors_per_internal_wall".into(),
                message: "must be finite and >= 0".into(),
            });
        }
        if !m.external_air_temperature_c.is_finite()
            || m.external_air_temperature_c >= SETBACK_ROOM_TEMPERATURE_C
        {
            errors.push(ConfigError {
                field: "model.external_air_temperature_c".into(),
                message: format!("must be finite and < {SETBACK_ROOM_TEMPERATURE_C}"),
            });
        }

        let r = &self.run;
        if !r.heating_threshold_c.is_finite() || r.heating_threshold_c > SETBACK_ROOM_TEMPERATURE_C {
            errors.push(ConfigError {
                field: "run.heating_threshold_c".into(),
                message: format!("must be finite and <= {SETBACK_ROOM_TEMPERATURE_C}"),
            });
        }

        let syn = &self.synthetic;
        if syn.days == 0 {
            errors.push(ConfigError {
                field: "synthetic.days".into(),
                message: "must be > 0".into(),
            });
        }
        if !(syn.noise_std_k.is_finite() && syn.noise_std_k >= 0.0) {
            errors.push(ConfigError {
                field: "synthetic.noise_std_k".into(),
                message: "must be finite and >= 0".into(),
            });
        }
        for (field, value) in [
            ("synthetic.mean_c", syn.mean_c),
            ("synthetic.annual_amplitude_k", syn.annual_amplitude_k),
            ("synthetic.diurnal_amplitude_k", syn.diurnal_amplitude_k),
        ] {
            if !value.is_finite() {
                errors.push(ConfigError {
                    field: field.into(),
                    message: "must be finite".into(),
                });
            }
        }

        errors
    }

    /// Builds the model parameters at the configured external temperature.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a parameter is rejected.
    pub fn model_parameters(&self) -> Result<ModelParameters, ConfigError> {
        let m = &self.model;
        ModelParameters::new(
            m.doors_per_internal_wall,
            m.correct_cop_for_flow_vs_mw,
            m.rooms_alternating_abab,
            m.external_air_temperature_c,
        )
        .map_err(|e| ConfigError {
            field: "model".to_string(),
            message: e.to_string(),
        })
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            heating_threshold_c: self.run.heating_threshold_c,
            mean_basis: self.run.mean_basis,
        }
    }
}
