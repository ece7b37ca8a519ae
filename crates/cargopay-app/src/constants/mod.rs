//! Constants for cargo income calculation

pub mod cargos;
pub mod speeds;

pub use cargos::{all_cargos, cargo_names, lookup_cargo, CARGO_ALIASES};
pub use speeds::{DEFAULT_DISTANCE_MAX, DEFAULT_DISTANCE_MIN, SPEED_PRESETS};
