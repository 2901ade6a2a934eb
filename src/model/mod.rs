//! Steady-state thermal model of a home with half its rooms set back.
//!
//! Rooms alternate between class A (held at normal temperature) and class B
//! (set back by TRVs). [`stiff`] and [`soft`] are the two ways the A rooms
//! can be regulated; the rest are the shared building blocks.

pub mod constants;
pub mod dwelling;
pub mod params;
pub mod physics;
pub mod soft;
pub mod stiff;
pub mod types;

pub use params::ModelParameters;
pub use soft::compute_soft_a_temp_demand_w;
pub use stiff::{compute_bungalow_demand_w, compute_demand_w, compute_detached_demand_w};
pub use types::{
    Archetype, DemandWithoutAndWithSetback, HeatAndElectricityDemand, Regulation, SoftDemand,
};
