//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use cargopay_types::OutputFormat;

#[derive(Parser)]
#[command(name = "cargopay")]
#[command(version)]
#[command(about = "Cargo payment calculator for OpenTTD-style deliveries")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, csv). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Sweep parameters shared by `sweep` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct SweepArgs {
    /// Cargo name (see `cargopay cargos`). Uses config value if not specified.
    #[arg(long, short = 'c')]
    pub cargo: Option<String>,

    /// Shortest distance in tiles
    #[arg(long)]
    pub min: Option<u32>,

    /// Longest distance in tiles
    #[arg(long)]
    pub max: Option<u32>,

    /// Vehicle speeds in km/h, comma separated (e.g. 50,75,100)
    #[arg(long, short = 's', value_delimiter = ',', conflicts_with = "presets")]
    pub speeds: Option<Vec<f64>>,

    /// Sweep every preset speed (50 to 275 km/h in steps of 25)
    #[arg(long)]
    pub presets: bool,

    /// Aircraft flag per speed, comma separated (e.g. false,true)
    #[arg(long, value_delimiter = ',', conflicts_with = "aircraft")]
    pub aircraft_flags: Option<Vec<bool>>,

    /// Treat every vehicle as an aircraft
    #[arg(long)]
    pub aircraft: bool,

    /// Read cargo, distances and vehicles from a TOML scenario file
    #[arg(
        long,
        conflicts_with_all = [
            "cargo",
            "min",
            "max",
            "speeds",
            "presets",
            "aircraft_flags",
            "aircraft",
        ]
    )]
    pub scenario: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List cargo kinds and their payment constants
    Cargos,

    /// Price a single delivery
    Compute {
        /// Cargo name. Uses config value if not specified.
        #[arg(long, short = 'c')]
        cargo: Option<String>,

        /// Distance in tiles
        #[arg(long, short = 'd')]
        distance: f64,

        /// Listed vehicle speed in km/h
        #[arg(long, short = 's')]
        speed: f64,

        /// Cargo units delivered. Uses config value if not specified.
        #[arg(long, short = 'a')]
        amount: Option<f64>,

        /// Vehicle is an aircraft (travels at a quarter of its listed speed)
        #[arg(long)]
        aircraft: bool,
    },

    /// Income per cargo unit over a range of distances
    Sweep {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Write the rows to a CSV file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export a sweep to an Excel workbook with a chart
    Export {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default cargo
        #[arg(long)]
        set_cargo: Option<String>,

        /// Set default distance range
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
        set_distance: Option<Vec<u32>>,

        /// Set default speeds, comma separated
        #[arg(long, value_delimiter = ',')]
        set_speeds: Option<Vec<f64>>,

        /// Treat default vehicles as aircraft
        #[arg(long)]
        set_aircraft: Option<bool>,

        /// Set default cargo amount for single trips
        #[arg(long)]
        set_amount: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
