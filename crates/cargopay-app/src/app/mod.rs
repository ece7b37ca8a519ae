//! Use cases exposed to the CLI

pub mod income_service;

pub use income_service::{quote_trip, run_sweep, SweepResult, TripQuote};
