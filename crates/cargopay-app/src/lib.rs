//! Application service layer - cargo catalog, config, use cases

pub mod app;
pub mod config;
pub mod constants;
