//! Income Service - single trip quotes and distance sweeps
//!
//! Resolves cargo names against the catalog, then delegates to the
//! domain services for the actual calculation.

use cargopay_domain::model::{CargoKind, IncomeSample, SweepRequest, TripParameters};
use cargopay_domain::service::income_calculator::{INGAME_DAY_SCALE, MIN_TIME_BONUS};
use cargopay_domain::service::{
    generate_series, summarize_series, time_bonus, trip_income, SpeedSummary,
};
use cargopay_types::Result;
use serde::Serialize;

use crate::constants::lookup_cargo;

/// Priced single delivery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripQuote {
    pub cargo: CargoKind,
    pub amount: f64,
    pub is_aircraft: bool,
    #[serde(flatten)]
    pub sample: IncomeSample,
    /// Raw time bonus before the floor is applied
    pub time_bonus: f64,
    /// Payment was computed from the floor bonus
    pub floored: bool,
}

/// Output of a sweep together with the resolved cargo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub cargo: CargoKind,
    pub samples: Vec<IncomeSample>,
}

impl SweepResult {
    pub fn summaries(&self) -> Vec<SpeedSummary> {
        summarize_series(&self.cargo, &self.samples)
    }
}

/// Price one delivery of `amount` units of the named cargo
pub fn quote_trip(
    cargo_name: &str,
    amount: f64,
    distance: f64,
    speed: f64,
    is_aircraft: bool,
) -> Result<TripQuote> {
    let cargo = lookup_cargo(cargo_name)?;
    let trip = TripParameters {
        cargo: cargo.clone(),
        amount,
        distance,
        speed,
        is_aircraft,
    };
    let sample = trip_income(&trip)?;
    let tbonus = time_bonus(cargo, sample.time * INGAME_DAY_SCALE);
    let floored = tbonus < MIN_TIME_BONUS;

    if floored {
        log::warn!(
            "{} over {} tiles takes {:.1} days, payment fell to the floor rate",
            cargo.name,
            distance,
            sample.time
        );
    }

    Ok(TripQuote {
        cargo: trip.cargo,
        amount,
        is_aircraft,
        sample,
        time_bonus: tbonus,
        floored,
    })
}

/// Run a sweep for a request whose cargo is named
pub fn run_sweep(request: &SweepRequest) -> Result<SweepResult> {
    let cargo = lookup_cargo(&request.cargo)?;
    let samples = generate_series(
        cargo,
        request.distance_range,
        &request.speeds,
        &request.aircraft_flags,
    )?;
    log::debug!("sweep of {} produced {} samples", cargo.name, samples.len());

    Ok(SweepResult {
        cargo: cargo.clone(),
        samples,
    })
}
