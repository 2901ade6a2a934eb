//! Error types for the thermal model and the hourly driver.

use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Rejected at `ModelParameters` construction.
    #[error("invalid model parameter {field}: {value}")]
    InvalidParameter { field: &'static str, value: f64 },

    /// The model only holds while it is colder outside than the setback rooms.
    #[error(
        "external air temperature {external_c} C must be below the setback room temperature {setback_c} C"
    )]
    OutsideDomain { external_c: f64, setback_c: f64 },

    /// Contract violation between model components.
    #[error("precondition violated: {what} (value={value})")]
    Precondition { what: &'static str, value: f64 },

    #[error("non-physical heat-pump CoP {cop} at flow temperature {flow_c} C")]
    NonPhysicalCoP { flow_c: f64, cop: f64 },

    #[error("no A-room equilibrium temperature found at external temperature {external_c} C")]
    EquilibriumNotFound { external_c: f64 },

    #[error("hourly temperature series is empty")]
    EmptyInput,

    #[error("hour {index}: external temperature {value} is not a finite number")]
    NonFiniteTemperature { index: usize, value: f64 },

    #[error("none of the {total_hours} hours is below the heating threshold {threshold_c} C")]
    NoHeatingHours { total_hours: usize, threshold_c: f64 },
}
