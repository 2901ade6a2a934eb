//! The seam between the hourly driver and the two solvers.

use crate::error::ModelResult;
use crate::model::{
    Archetype, DemandWithoutAndWithSetback, ModelParameters, Regulation, compute_demand_w,
    compute_soft_a_temp_demand_w,
};

/// Solver output for one external temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourDemand {
    pub demand: DemandWithoutAndWithSetback,
    /// A-room equilibrium temperature, where the regulation lets it sag (C).
    pub equilibrium_temperature_a_c: Option<f64>,
}

/// How the A rooms are regulated while the B rooms are set back.
///
/// Implementors turn one set of parameters (with the hour's external
/// temperature already applied) into demand without and with setback.
pub trait RegulationStrategy {
    /// Evaluates the model for one external temperature.
    ///
    /// # Errors
    ///
    /// Propagates the solver's `ModelError`.
    fn demand(&self, params: &ModelParameters, archetype: Archetype) -> ModelResult<HourDemand>;

    /// Which regulation this strategy implements.
    fn regulation(&self) -> Regulation;
}

/// A radiators driven to hold normal temperature; closed form.
#[derive(Debug, Default, Clone, Copy)]
pub struct StiffRegulation;

impl RegulationStrategy for StiffRegulation {
    fn demand(&self, params: &ModelParameters, archetype: Archetype) -> ModelResult<HourDemand> {
        Ok(HourDemand {
            demand: compute_demand_w(params, archetype)?,
            equilibrium_temperature_a_c: None,
        })
    }

    fn regulation(&self) -> Regulation {
        Regulation::Stiff
    }
}

/// Flow temperature pinned at its no-setback value; A rooms find equilibrium.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftRegulation;

impl RegulationStrategy for SoftRegulation {
    fn demand(&self, params: &ModelParameters, archetype: Archetype) -> ModelResult<HourDemand> {
        let soft = compute_soft_a_temp_demand_w(params, archetype)?;
        Ok(HourDemand {
            demand: soft.demand,
            equilibrium_temperature_a_c: Some(soft.equilibrium_temperature_a_c),
        })
    }

    fn regulation(&self) -> Regulation {
        Regulation::Soft
    }
}
