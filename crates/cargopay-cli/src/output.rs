//! Output formatting module

use cargopay_app::app::{SweepResult, TripQuote};
use cargopay_app::constants::all_cargos;
use cargopay_domain::service::render_series_report;
use cargopay_infra::series_csv::{save_series_csv, write_rows_csv, write_series_csv};
use cargopay_types::{OutputFormat, Result};
use std::path::Path;

pub fn output_cargos(output_format: OutputFormat) -> Result<()> {
    let cargos = all_cargos();
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(cargos)?);
        }
        OutputFormat::Csv => {
            write_rows_csv(std::io::stdout().lock(), cargos)?;
        }
        OutputFormat::Table => {
            println!("{:<18} {:>9} {:>6} {:>6}", "Cargo", "Base pay", "Days1", "Days2");
            println!("{}", "-".repeat(42));
            for cargo in cargos {
                println!(
                    "{:<18} {:>9} {:>6} {:>6}",
                    cargo.name, cargo.base_pay, cargo.days1, cargo.days2
                );
            }
            println!("\n{} cargos", cargos.len());
        }
    }
    Ok(())
}

pub fn output_quote(output_format: OutputFormat, quote: &TripQuote) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(quote)?);
        }
        OutputFormat::Csv => {
            write_series_csv(std::io::stdout().lock(), &[quote.sample])?;
        }
        OutputFormat::Table => {
            println!("\nTrip Income");
            println!("===========");
            println!("Cargo:           {}", quote.cargo);
            println!("Amount:          {}", quote.amount);
            println!("Distance:        {} tiles", quote.sample.distance);
            println!(
                "Speed:           {} km/h{}",
                quote.sample.speed,
                if quote.is_aircraft { " (aircraft)" } else { "" }
            );
            println!("Transit time:    {:.2} days", quote.sample.time);
            println!("Time bonus:      {:.2}", quote.time_bonus);
            if quote.floored {
                println!("                 (below 31, floor payment applies)");
            }
            println!("Income:          {:.2}", quote.sample.income);
        }
    }
    Ok(())
}

pub fn output_sweep(
    output_format: OutputFormat,
    result: &SweepResult,
    csv_path: Option<&Path>,
) -> Result<()> {
    if let Some(path) = csv_path {
        save_series_csv(path, &result.samples)?;
        println!(
            "Wrote {} samples of {} to {}",
            result.samples.len(),
            result.cargo.name,
            path.display()
        );
        return Ok(());
    }

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Csv => {
            write_series_csv(std::io::stdout().lock(), &result.samples)?;
        }
        OutputFormat::Table => {
            println!("{}", render_series_report(&result.cargo, &result.summaries()));
        }
    }
    Ok(())
}
