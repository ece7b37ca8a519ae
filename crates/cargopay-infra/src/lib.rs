//! Infrastructure layer - scenario files and series export

pub mod excel;
pub mod scenario_loader;
pub mod series_csv;
