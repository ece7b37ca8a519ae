//! CSV output for income series

use cargopay_domain::model::IncomeSample;
use cargopay_types::{Error, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write any serializable rows, header taken from the field names
pub fn write_rows_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row).map_err(|e| Error::Csv(e.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write samples with a `speed,distance,time,income` header
pub fn write_series_csv<W: Write>(writer: W, samples: &[IncomeSample]) -> Result<()> {
    write_rows_csv(writer, samples)
}

pub fn save_series_csv(path: &Path, samples: &[IncomeSample]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_series_csv(file, samples)?;
    log::info!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}
