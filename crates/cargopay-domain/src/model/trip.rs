//! Per-trip calculation input

use serde::{Deserialize, Serialize};

use super::CargoKind;

/// Everything needed to price a single delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripParameters {
    pub cargo: CargoKind,
    /// Units delivered
    pub amount: f64,
    /// Tiles travelled
    pub distance: f64,
    /// Listed vehicle speed (km/h)
    pub speed: f64,
    /// Aircraft travel at a quarter of their listed speed
    pub is_aircraft: bool,
}
