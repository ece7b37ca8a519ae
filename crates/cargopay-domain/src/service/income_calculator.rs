//! Cargo payment calculation
//!
//! The payment for a delivery is
//! `base_pay * amount * distance * tbonus / 2^21`, where the time bonus
//! `tbonus` starts at 255 and decays once the trip takes longer than the
//! cargo's `days1`, then decays twice as fast after `days1 + days2`.
//! When the bonus drops below 31 the payment is computed from a fixed
//! floor of 31 without the distance term.

use cargopay_types::CalcError;

use super::time_model::time_to_travel;
use crate::model::{CargoKind, IncomeSample, TripParameters};

/// Time bonus for a trip delivered within `days1`
pub const MAX_TIME_BONUS: f64 = 255.0;

/// Bonus below which the floor payment applies
pub const MIN_TIME_BONUS: f64 = 31.0;

/// Formula time units per ingame day
pub const INGAME_DAY_SCALE: f64 = 2.5;

/// 2^-21
const PAYMENT_SCALE: f64 = 1.0 / 2_097_152.0;

/// Raw time bonus for a transit time already in formula units.
///
/// The last branch is not clamped and goes negative for very long trips;
/// [`income`] substitutes the floor in that case.
pub fn time_bonus(cargo: &CargoKind, time: f64) -> f64 {
    let days1 = f64::from(cargo.days1);
    let days2 = f64::from(cargo.days2);

    if time <= days1 {
        MAX_TIME_BONUS
    } else if time <= days1 + days2 {
        MAX_TIME_BONUS - (time - days1)
    } else {
        MAX_TIME_BONUS - 2.0 * (time - days1) + days2
    }
}

/// Revenue for delivering `amount` units of `cargo` over `distance` tiles.
///
/// Pass `time_is_ingame_days = false` when `time` is already in formula units.
pub fn income(
    cargo: &CargoKind,
    amount: f64,
    distance: f64,
    time: f64,
    time_is_ingame_days: bool,
) -> Result<f64, CalcError> {
    check_quantity("amount", amount)?;
    check_quantity("distance", distance)?;
    check_quantity("time", time)?;

    let time = if time_is_ingame_days {
        time * INGAME_DAY_SCALE
    } else {
        time
    };

    let base = f64::from(cargo.base_pay) * amount;
    let tbonus = time_bonus(cargo, time);

    if tbonus < MIN_TIME_BONUS {
        Ok(base * MIN_TIME_BONUS * PAYMENT_SCALE)
    } else {
        Ok(base * distance * tbonus * PAYMENT_SCALE)
    }
}

/// Price one delivery end to end: transit time, then payment.
pub fn trip_income(trip: &TripParameters) -> Result<IncomeSample, CalcError> {
    check_quantity("amount", trip.amount)?;
    let time = time_to_travel(trip.speed, trip.distance, trip.is_aircraft)?;
    let revenue = income(&trip.cargo, trip.amount, trip.distance, time, true)?;

    log::debug!(
        "{} x{} over {} tiles at {} km/h: {:.3} days, {:.4}",
        trip.cargo.name,
        trip.amount,
        trip.distance,
        trip.speed,
        time,
        revenue
    );

    Ok(IncomeSample {
        speed: trip.speed,
        distance: trip.distance,
        time,
        income: revenue,
    })
}

fn check_quantity(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::InvalidQuantity { field, value })
    }
}
