//! Sweep request value object

use serde::{Deserialize, Serialize};

use super::DistanceRange;

/// Cargo, distance range and vehicles for one income sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRequest {
    /// Cargo name, resolved against the catalog when the sweep runs
    pub cargo: String,
    pub distance_range: DistanceRange,
    pub speeds: Vec<f64>,
    /// Parallel to `speeds`
    pub aircraft_flags: Vec<bool>,
}

impl SweepRequest {
    pub fn new(cargo: impl Into<String>, distance_range: DistanceRange) -> Self {
        Self {
            cargo: cargo.into(),
            distance_range,
            speeds: Vec::new(),
            aircraft_flags: Vec::new(),
        }
    }

    pub fn with_vehicle(mut self, speed: f64, is_aircraft: bool) -> Self {
        self.speeds.push(speed);
        self.aircraft_flags.push(is_aircraft);
        self
    }

    /// Add several speeds sharing one aircraft flag
    pub fn with_speeds(mut self, speeds: &[f64], is_aircraft: bool) -> Self {
        for &speed in speeds {
            self = self.with_vehicle(speed, is_aircraft);
        }
        self
    }

    pub fn with_distance_range(mut self, distance_range: DistanceRange) -> Self {
        self.distance_range = distance_range;
        self
    }
}
