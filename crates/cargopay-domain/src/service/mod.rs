//! Domain services

pub mod income_calculator;
pub mod series_generator;
pub mod series_report;
pub mod time_model;

pub use income_calculator::{income, time_bonus, trip_income};
pub use series_generator::generate_series;
pub use series_report::{render_series_report, summarize_series, SpeedSummary};
pub use time_model::time_to_travel;
