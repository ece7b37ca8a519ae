//! Configuration management for cargopay
//!
//! Config stored at: ~/.config/cargopay/config.json

use cargopay_domain::model::{DistanceRange, SweepRequest};
use cargopay_types::{CalcError, ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{lookup_cargo, DEFAULT_DISTANCE_MAX, DEFAULT_DISTANCE_MIN};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Cargo used when a command does not name one
    #[serde(default = "default_cargo")]
    pub default_cargo: String,

    /// Lower bound of the swept distance range (tiles)
    #[serde(default = "default_distance_min")]
    pub distance_min: u32,

    /// Upper bound of the swept distance range (tiles)
    #[serde(default = "default_distance_max")]
    pub distance_max: u32,

    /// Default vehicle speeds (km/h)
    #[serde(default = "default_speeds")]
    pub speeds: Vec<f64>,

    /// Treat default vehicles as aircraft
    #[serde(default)]
    pub aircraft: bool,

    /// Cargo units per trip for single trip quotes
    #[serde(default = "default_amount")]
    pub amount: f64,

    /// Default output format (table, json, csv)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_cargo() -> String {
    "Passengers".to_string()
}

fn default_distance_min() -> u32 {
    DEFAULT_DISTANCE_MIN
}

fn default_distance_max() -> u32 {
    DEFAULT_DISTANCE_MAX
}

fn default_speeds() -> Vec<f64> {
    vec![50.0]
}

fn default_amount() -> f64 {
    1.0
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_cargo: default_cargo(),
            distance_min: default_distance_min(),
            distance_max: default_distance_max(),
            speeds: default_speeds(),
            aircraft: false,
            amount: default_amount(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("cargopay");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or fall back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        log::info!("saved configuration to {}", path.display());
        Ok(())
    }

    /// Reject values that would make every sweep fail
    pub fn validate(&self) -> Result<()> {
        lookup_cargo(&self.default_cargo)?;
        self.distance_range()?;
        if let Some(&bad) = self.speeds.iter().find(|s| !s.is_finite() || **s <= 0.0) {
            return Err(CalcError::InvalidSpeed(bad).into());
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(CalcError::InvalidQuantity {
                field: "amount",
                value: self.amount,
            }
            .into());
        }
        Ok(())
    }

    pub fn distance_range(&self) -> Result<DistanceRange> {
        Ok(DistanceRange::new(self.distance_min, self.distance_max)?)
    }

    /// Sweep of the default cargo at every configured speed
    pub fn sweep_request(&self) -> Result<SweepRequest> {
        Ok(SweepRequest::new(self.default_cargo.clone(), self.distance_range()?)
            .with_speeds(&self.speeds, self.aircraft))
    }

    /// Render the settings followed by the file they were loaded from
    pub fn describe(&self, path: &Path) -> String {
        format!("{}\nConfig file:    {}\n", self, path.display())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cargopay Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Default cargo:  {}", self.default_cargo)?;
        writeln!(
            f,
            "Distance:       {}..={} tiles",
            self.distance_min, self.distance_max
        )?;
        let speeds: Vec<String> = self.speeds.iter().map(|s| format!("{}", s)).collect();
        writeln!(f, "Speeds:         {} km/h", speeds.join(", "))?;
        writeln!(f, "Aircraft:       {}", self.aircraft)?;
        writeln!(f, "Amount:         {}", self.amount)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cargopay_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            default_cargo: "Coal".to_string(),
            distance_min: 20,
            distance_max: 80,
            speeds: vec![64.0, 112.0],
            aircraft: false,
            amount: 30.0,
            output_format: OutputFormat::Json,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_cargo": "Mail", "speeds": [88]}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_cargo, "Mail");
        assert_eq!(config.speeds, vec![88.0]);
        assert_eq!(config.distance_max, DEFAULT_DISTANCE_MAX);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_save_rejects_unknown_cargo() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            default_cargo: "Uranium".to_string(),
            ..Config::default()
        };

        assert!(matches!(
            config.save_to(&path),
            Err(Error::Calc(CalcError::UnknownCargo(_)))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = Config {
            distance_min: 600,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_describe_names_given_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");

        let text = Config::default().describe(&path);
        assert!(text.contains("Default cargo:  Passengers"));
        assert!(text.ends_with(&format!("Config file:    {}\n", path.display())));
        assert!(!Config::default().to_string().contains("Config file"));
    }

    #[test]
    fn test_sweep_request_from_defaults() {
        let request = Config::default().sweep_request().unwrap();
        assert_eq!(request.cargo, "Passengers");
        assert_eq!(request.distance_range.len(), 501);
        assert_eq!(request.speeds, vec![50.0]);
        assert_eq!(request.aircraft_flags, vec![false]);
    }
}
