//! Hourly scenario engine: runs one solver over a temperature series.

use tracing::{debug, info, trace};

use crate::error::{ModelError, ModelResult};
use crate::model::{Archetype, ModelParameters, Regulation};
use crate::weather::TemperatureReading;

use super::regulation::{RegulationStrategy, SoftRegulation, StiffRegulation};
use super::summary::ScenarioResult;
use super::types::{EngineOptions, HourResult, ScenarioRun};

/// Scenario engine owning the model parameters and the regulation strategy.
///
/// Generic over `R: RegulationStrategy` for static dispatch. Each hour is
/// evaluated independently from the base parameters with only the external
/// temperature replaced.
pub struct ScenarioEngine<R: RegulationStrategy> {
    params: ModelParameters,
    archetype: Archetype,
    strategy: R,
    options: EngineOptions,
}

impl<R: RegulationStrategy> ScenarioEngine<R> {
    /// Creates an engine with default options.
    ///
    /// # Arguments
    ///
    /// * `params` - Base parameters; their external temperature is ignored
    /// * `archetype` - Dwelling shape
    /// * `strategy` - Stiff or soft regulation
    pub fn new(params: ModelParameters, archetype: Archetype, strategy: R) -> Self {
        Self::with_options(params, archetype, strategy, EngineOptions::default())
    }

    /// Creates an engine with a custom heating threshold or averaging basis.
    pub fn with_options(
        params: ModelParameters,
        archetype: Archetype,
        strategy: R,
        options: EngineOptions,
    ) -> Self {
        Self {
            params,
            archetype,
            strategy,
            options,
        }
    }

    /// Evaluates one hour, or returns `None` if it needs no heating.
    ///
    /// # Arguments
    ///
    /// * `index` - Position of the hour in the series
    /// * `reading` - The hour's external temperature
    ///
    /// # Errors
    ///
    /// Returns `ModelError::NonFiniteTemperature` for a NaN or infinite
    /// reading, or propagates the solver's `ModelError`.
    pub fn step<T: TemperatureReading>(&self, index: usize, reading: &T) -> ModelResult<Option<HourResult>> {
        let external_c = reading.temperature_c();
        if !external_c.is_finite() {
            return Err(ModelError::NonFiniteTemperature {
                index,
                value: external_c,
            });
        }
        if external_c >= self.options.heating_threshold_c {
            trace!(index, external_c, "skipping non-heating hour");
            return Ok(None);
        }

        let params = self.params.with_external_temperature(external_c);
        let hour = self.strategy.demand(&params, self.archetype)?;
        let result = HourResult {
            index,
            timestamp: reading.timestamp().map(str::to_owned),
            external_c,
            demand: hour.demand,
            equilibrium_temperature_a_c: hour.equilibrium_temperature_a_c,
            setback_raises_demand: hour.demand.setback_raises_electricity(),
        };
        trace!(%result, "hour");
        Ok(Some(result))
    }

    /// Runs every hour of `temperatures` and aggregates the heating hours.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyInput` for an empty series,
    /// `ModelError::NoHeatingHours` if every hour is at or above the heating
    /// threshold, or the first solver error encountered.
    pub fn run<T: TemperatureReading>(&self, temperatures: &[T]) -> ModelResult<ScenarioRun> {
        if temperatures.is_empty() {
            return Err(ModelError::EmptyInput);
        }
        debug!(
            hours = temperatures.len(),
            archetype = %self.archetype,
            regulation = %self.strategy.regulation(),
            threshold_c = self.options.heating_threshold_c,
            "running scenario"
        );

        let mut hours = Vec::with_capacity(temperatures.len());
        for (index, reading) in temperatures.iter().enumerate() {
            if let Some(hour) = self.step(index, reading)? {
                hours.push(hour);
            }
        }

        if hours.is_empty() {
            return Err(ModelError::NoHeatingHours {
                total_hours: temperatures.len(),
                threshold_c: self.options.heating_threshold_c,
            });
        }

        let summary = ScenarioResult::from_hours(
            &hours,
            temperatures.len(),
            self.archetype,
            self.strategy.regulation(),
            self.options.mean_basis,
        );
        info!(
            heating_hours = summary.heating_hours,
            total_hours = summary.total_hours,
            fraction_raises = summary.hours_fraction_setback_raises_demand,
            "scenario complete"
        );
        Ok(ScenarioRun { hours, summary })
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}

/// Runs a scenario with default options and returns its aggregate.
///
/// # Examples
///
/// ```
/// use trv_setback::model::{Archetype, ModelParameters, Regulation};
/// use trv_setback::sim::run_scenario;
///
/// let result = run_scenario(&ModelParameters::default(), &[-3.0], Archetype::Bungalow, Regulation::Stiff)
///     .unwrap();
/// assert_eq!(result.hours_fraction_setback_raises_demand, 1.0);
/// ```
///
/// # Errors
///
/// As [`ScenarioEngine::run`].
pub fn run_scenario<T: TemperatureReading>(
    params: &ModelParameters,
    temperatures: &[T],
    archetype: Archetype,
    regulation: Regulation,
) -> ModelResult<ScenarioResult> {
    run_scenario_with_options(params, temperatures, archetype, regulation, EngineOptions::default())
        .map(|run| run.summary)
}

/// Runs a scenario with explicit options, keeping the per-hour records.
///
/// # Errors
///
/// As [`ScenarioEngine::run`].
pub fn run_scenario_with_options<T: TemperatureReading>(
    params: &ModelParameters,
    temperatures: &[T],
    archetype: Archetype,
    regulation: Regulation,
    options: EngineOptions,
) -> ModelResult<ScenarioRun> {
    match regulation {
        Regulation::Stiff => {
            ScenarioEngine::with_options(*params, archetype, StiffRegulation, options).run(temperatures)
        }
        Regulation::Soft => {
            ScenarioEngine::with_options(*params, archetype, SoftRegulation, options).run(temperatures)
        }
    }
}
