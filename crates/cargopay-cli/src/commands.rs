//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat, SweepArgs};
use crate::output::{output_cargos, output_quote, output_sweep};
use cargopay_app::app::{quote_trip, run_sweep};
use cargopay_app::config::Config;
use cargopay_app::constants::SPEED_PRESETS;
use cargopay_domain::model::{DistanceRange, SweepRequest};
use cargopay_infra::excel::export_to_excel;
use cargopay_infra::scenario_loader::load_scenario;
use cargopay_types::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = match cli.command {
        // Reset must work even when the existing file does not parse
        Commands::Config { reset: true, .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Cargos => output_cargos(output_format),

        Commands::Compute {
            cargo,
            distance,
            speed,
            amount,
            aircraft,
        } => cmd_compute(&config, cargo, distance, speed, amount, aircraft, output_format),

        Commands::Sweep { sweep, output } => cmd_sweep(&config, &sweep, output, output_format),

        Commands::Export { sweep, output } => cmd_export(&config, &sweep, &output),

        Commands::Config {
            show,
            set_cargo,
            set_distance,
            set_speeds,
            set_aircraft,
            set_amount,
            set_output,
            reset,
        } => cmd_config(
            &config_path,
            config,
            show,
            set_cargo,
            set_distance,
            set_speeds,
            set_aircraft,
            set_amount,
            set_output,
            reset,
        ),
    }
}

fn cmd_compute(
    config: &Config,
    cargo: Option<String>,
    distance: f64,
    speed: f64,
    amount: Option<f64>,
    aircraft: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let cargo = cargo.unwrap_or_else(|| config.default_cargo.clone());
    let amount = amount.unwrap_or(config.amount);
    let quote = quote_trip(&cargo, amount, distance, speed, aircraft)?;
    output_quote(output_format, &quote)
}

/// Build the sweep request from a scenario file, or from CLI args over config defaults
pub fn resolve_sweep_request(config: &Config, args: &SweepArgs) -> Result<SweepRequest> {
    if let Some(ref scenario) = args.scenario {
        return load_scenario(scenario);
    }

    let cargo = args
        .cargo
        .clone()
        .unwrap_or_else(|| config.default_cargo.clone());
    let range = DistanceRange::new(
        args.min.unwrap_or(config.distance_min),
        args.max.unwrap_or(config.distance_max),
    )?;

    let speeds: Vec<f64> = if args.presets {
        SPEED_PRESETS.to_vec()
    } else {
        args.speeds.clone().unwrap_or_else(|| config.speeds.clone())
    };

    let mut request = SweepRequest::new(cargo, range);
    match args.aircraft_flags {
        // Length mismatches surface from the generator
        Some(ref flags) => {
            request.speeds = speeds;
            request.aircraft_flags = flags.clone();
        }
        None => {
            let aircraft = args.aircraft || config.aircraft;
            request = request.with_speeds(&speeds, aircraft);
        }
    }

    Ok(request)
}

fn cmd_sweep(
    config: &Config,
    args: &SweepArgs,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let request = resolve_sweep_request(config, args)?;
    let result = run_sweep(&request)?;
    output_sweep(output_format, &result, output.as_deref())
}

fn cmd_export(config: &Config, args: &SweepArgs, output: &Path) -> Result<()> {
    let request = resolve_sweep_request(config, args)?;
    let result = run_sweep(&request)?;

    export_to_excel(&result.cargo, &result.samples, output)?;
    println!(
        "Exported {} samples of {} to {}",
        result.samples.len(),
        result.cargo.name,
        output.display()
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    config_path: &Path,
    mut config: Config,
    show: bool,
    set_cargo: Option<String>,
    set_distance: Option<Vec<u32>>,
    set_speeds: Option<Vec<f64>>,
    set_aircraft: Option<bool>,
    set_amount: Option<f64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config.describe(config_path));
        return Ok(());
    }

    let mut modified = false;

    if let Some(cargo) = set_cargo {
        config.default_cargo = cargo;
        modified = true;
    }

    if let Some(bounds) = set_distance {
        let [min, max] = bounds.as_slice() else {
            return Err(ConfigError::ParseError(
                "--set-distance takes MIN and MAX".to_string(),
            )
            .into());
        };
        config.distance_min = *min;
        config.distance_max = *max;
        modified = true;
    }

    if let Some(speeds) = set_speeds {
        config.speeds = speeds;
        modified = true;
    }

    if let Some(aircraft) = set_aircraft {
        config.aircraft = aircraft;
        modified = true;
    }

    if let Some(amount) = set_amount {
        config.amount = amount;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        print!("{}", config.describe(config_path));
    }

    Ok(())
}
