/// Hourly scenario driver.
pub mod engine;
pub mod regulation;
/// Aggregate results over an hourly series.
pub mod summary;
pub mod types;

pub use engine::{ScenarioEngine, run_scenario, run_scenario_with_options};
pub use regulation::{RegulationStrategy, SoftRegulation, StiffRegulation};
pub use summary::{MeanBasis, ScenarioResult};
pub use types::{EngineOptions, HourResult, ScenarioRun};
