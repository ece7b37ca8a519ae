//! Domain models and income services for cargo payment calculation

pub mod model;
pub mod service;
