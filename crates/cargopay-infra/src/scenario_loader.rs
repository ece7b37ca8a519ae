//! Sweep scenario loader from TOML files

use cargopay_domain::model::{DistanceRange, SweepRequest};
use cargopay_types::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Container for parsing scenario files
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    cargo: String,
    distance_min: u32,
    distance_max: u32,
    #[serde(default)]
    vehicles: Vec<VehicleEntry>,
}

#[derive(Debug, Deserialize)]
struct VehicleEntry {
    /// Listed speed (km/h)
    speed: f64,
    #[serde(default)]
    aircraft: bool,
}

/// Load a sweep request from a TOML scenario file
pub fn load_scenario(path: &Path) -> Result<SweepRequest> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Scenario file not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    log::debug!("loading scenario {}", path.display());
    load_scenario_str(&content)
}

/// Load a sweep request from TOML text
pub fn load_scenario_str(toml_content: &str) -> Result<SweepRequest> {
    let scenario: ScenarioFile = toml::from_str(toml_content)
        .map_err(|e| Error::Scenario(format!("Failed to parse scenario TOML: {}", e)))?;

    let range = DistanceRange::new(scenario.distance_min, scenario.distance_max)?;

    let request = scenario
        .vehicles
        .iter()
        .fold(SweepRequest::new(scenario.cargo, range), |request, v| {
            request.with_vehicle(v.speed, v.aircraft)
        });

    if request.speeds.is_empty() {
        return Err(Error::Scenario(
            "Scenario lists no [[vehicles]]".to_string(),
        ));
    }
    Ok(request)
}
