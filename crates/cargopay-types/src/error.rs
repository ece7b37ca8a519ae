//! Error types for cargopay

use thiserror::Error;

/// Input validation failures raised by the income engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Unknown cargo: {0}")]
    UnknownCargo(String),

    #[error("Invalid speed: {0} (must be a finite value greater than zero)")]
    InvalidSpeed(f64),

    #[error("Invalid {field}: {value} (must be a finite value of zero or more)")]
    InvalidQuantity { field: &'static str, value: f64 },

    #[error("Mismatched lengths: {speeds} speeds but {aircraft_flags} aircraft flags")]
    MismatchedLength { speeds: usize, aircraft_flags: usize },

    #[error("Invalid distance range: {lo}..={hi} (min must not exceed max)")]
    InvalidDistanceRange { lo: u32, hi: u32 },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Calc(#[from] CalcError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
