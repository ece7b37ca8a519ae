//! Excel export of income series with an income vs distance chart

use cargopay_domain::model::{CargoKind, IncomeSample};
use cargopay_domain::service::{summarize_series, SpeedSummary};
use cargopay_types::{Error, Result};
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook, Worksheet};
use std::path::Path;

const SERIES_SHEET: &str = "Series";

/// Export a series to an Excel workbook
///
/// The `Summary` sheet describes the cargo and each speed group, the
/// `Series` sheet holds the rows and one chart line per speed group.
pub fn export_to_excel(
    cargo: &CargoKind,
    samples: &[IncomeSample],
    output_path: &Path,
) -> Result<()> {
    let summaries = summarize_series(cargo, samples);
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, cargo, &summaries)?;

    let series_sheet = workbook.add_worksheet();
    write_series_sheet(series_sheet, samples)?;
    if !samples.is_empty() {
        let chart = build_chart(cargo, &summaries);
        series_sheet
            .insert_chart(1, 5, &chart)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;
    log::info!(
        "exported {} samples of {} to {}",
        samples.len(),
        cargo.name,
        output_path.display()
    );

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    cargo: &CargoKind,
    summaries: &[SpeedSummary],
) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Cargo Income Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let facts = [
        ("Base pay:", f64::from(cargo.base_pay)),
        ("Days1:", f64::from(cargo.days1)),
        ("Days2:", f64::from(cargo.days2)),
    ];
    sheet
        .write_string(2, 0, "Cargo:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, &cargo.name)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for (i, (label, value)) in facts.iter().enumerate() {
        let row = 3 + i as u32;
        sheet
            .write_string(row, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, *value)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let headers = ["Speed (km/h)", "Samples", "Best distance", "Days", "Best income", "Floor at"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(7, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (i, summary) in summaries.iter().enumerate() {
        let row = 8 + i as u32;
        let numbers = [
            summary.speed,
            summary.samples as f64,
            summary.best_distance,
            summary.best_time,
            summary.best_income,
        ];
        for (col, value) in numbers.iter().enumerate() {
            sheet
                .write_number(row, col as u16, *value)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        if let Some(distance) = summary.floor_distance {
            sheet
                .write_number(row, 5, distance)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    sheet
        .set_column_width(0, 16)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_series_sheet(sheet: &mut Worksheet, samples: &[IncomeSample]) -> Result<()> {
    sheet
        .set_name(SERIES_SHEET)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let headers = ["Speed (km/h)", "Distance (tiles)", "Time (days)", "Income"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, sample) in samples.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let values = [sample.speed, sample.distance, sample.time, sample.income];
        for (col, value) in values.iter().enumerate() {
            sheet
                .write_number(row, col as u16, *value)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    Ok(())
}

/// One line per speed group, x = distance, y = income
fn build_chart(cargo: &CargoKind, summaries: &[SpeedSummary]) -> Chart {
    let mut chart = Chart::new(ChartType::ScatterStraight);
    chart
        .title()
        .set_name(format!("{} income vs distance", cargo.name).as_str());
    chart.x_axis().set_name("Distance (tiles)");
    chart.y_axis().set_name("Income (per cargo unit)");

    // Groups are contiguous, data starts below the header row
    let mut first_row: u32 = 1;
    for summary in summaries {
        let last_row = first_row + summary.samples as u32 - 1;
        chart
            .add_series()
            .set_name(format!("{} km/h", summary.speed).as_str())
            .set_categories((SERIES_SHEET, first_row, 1, last_row, 1))
            .set_values((SERIES_SHEET, first_row, 3, last_row, 3));
        first_row = last_row + 1;
    }

    chart
}
