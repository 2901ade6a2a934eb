//! Steady-state model of TRV setback in a heat-pump-heated home.
//!
//! Setting back alternate rooms (B) with TRVs lowers whole-home heat loss,
//! but pulls heat out of the rooms still at normal temperature (A). Those
//! radiators then need hotter water, which lowers the heat pump's CoP. This
//! crate estimates which effect wins, for one external temperature or over
//! an hourly temperature series.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod report;
/// Hourly scenario driver and aggregation.
pub mod sim;
pub mod weather;
