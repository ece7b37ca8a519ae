//! Income vs distance sweeps for one or more vehicle speeds

use cargopay_types::CalcError;
use rayon::prelude::*;

use super::income_calculator::income;
use super::time_model::{speed_tiles_per_day, time_to_travel};
use crate::model::{CargoKind, DistanceRange, IncomeSample};

/// Sweep every integer distance in `distance_range` for each speed.
///
/// `speeds[i]` is paired with `aircraft_flags[i]`. Samples are grouped by
/// speed in the given order, distances ascending within a group, and each
/// sample prices a single cargo unit.
pub fn generate_series(
    cargo: &CargoKind,
    distance_range: DistanceRange,
    speeds: &[f64],
    aircraft_flags: &[bool],
) -> Result<Vec<IncomeSample>, CalcError> {
    if speeds.len() != aircraft_flags.len() {
        return Err(CalcError::MismatchedLength {
            speeds: speeds.len(),
            aircraft_flags: aircraft_flags.len(),
        });
    }
    let bad_speed = speeds
        .iter()
        .zip(aircraft_flags)
        .find(|(s, a)| !s.is_finite() || **s <= 0.0 || speed_tiles_per_day(**s, **a) <= 0.0);
    if let Some((&bad, _)) = bad_speed {
        return Err(CalcError::InvalidSpeed(bad));
    }

    log::debug!(
        "sweeping {} over {} for {} speed(s)",
        cargo.name,
        distance_range,
        speeds.len()
    );

    // Indexed parallel collect keeps the groups in input order
    let groups = speeds
        .par_iter()
        .zip(aircraft_flags.par_iter())
        .map(|(&speed, &is_aircraft)| sweep_speed(cargo, distance_range, speed, is_aircraft))
        .collect::<Result<Vec<_>, _>>()?;

    let mut samples = Vec::with_capacity(speeds.len() * distance_range.len());
    for group in groups {
        samples.extend(group);
    }
    Ok(samples)
}

fn sweep_speed(
    cargo: &CargoKind,
    distance_range: DistanceRange,
    speed: f64,
    is_aircraft: bool,
) -> Result<Vec<IncomeSample>, CalcError> {
    distance_range
        .iter()
        .map(|distance| {
            let distance = f64::from(distance);
            let time = time_to_travel(speed, distance, is_aircraft)?;
            let revenue = income(cargo, 1.0, distance, time, true)?;
            Ok(IncomeSample {
                speed,
                distance,
                time,
                income: revenue,
            })
        })
        .collect()
}
