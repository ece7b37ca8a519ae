//! Speed and distance to transit time conversion

use cargopay_types::CalcError;

/// Kilometres covered by one tile per ingame day of reference travel
pub const TILE_KM_PER_DAY: f64 = 668.0;

pub const HOURS_PER_DAY: f64 = 24.0;

/// Aircraft cruise at a quarter of their listed speed in tile units
pub const AIRCRAFT_SPEED_DIVISOR: f64 = 4.0;

/// Convert a listed speed (km/h) into tiles per ingame day
pub fn speed_tiles_per_day(speed: f64, is_aircraft: bool) -> f64 {
    let effective = if is_aircraft {
        speed / AIRCRAFT_SPEED_DIVISOR
    } else {
        speed
    };
    effective * HOURS_PER_DAY / TILE_KM_PER_DAY
}

/// Transit time in ingame days for `distance` tiles at `speed` km/h
pub fn time_to_travel(speed: f64, distance: f64, is_aircraft: bool) -> Result<f64, CalcError> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(CalcError::InvalidSpeed(speed));
    }
    if !distance.is_finite() || distance < 0.0 {
        return Err(CalcError::InvalidQuantity {
            field: "distance",
            value: distance,
        });
    }

    // Subnormal speeds round to zero tiles a day
    let tiles_per_day = speed_tiles_per_day(speed, is_aircraft);
    if tiles_per_day <= 0.0 {
        return Err(CalcError::InvalidSpeed(speed));
    }
    let time = distance / tiles_per_day;
    if !time.is_finite() {
        return Err(CalcError::InvalidQuantity {
            field: "distance",
            value: distance,
        });
    }
    Ok(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_trip() {
        // 100 km/h covers 100 * 24 / 668 tiles a day, so 100 tiles take 668 / 24 days
        let time = time_to_travel(100.0, 100.0, false).unwrap();
        assert!((time - 668.0 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_double_speed_halves_time() {
        for speed in [50.0, 75.0, 112.0, 264.0] {
            for distance in [1.0, 37.0, 500.0] {
                let slow = time_to_travel(speed, distance, false).unwrap();
                let fast = time_to_travel(2.0 * speed, distance, false).unwrap();
                assert!((fast - slow / 2.0).abs() < 1e-9 * slow);
            }
        }
    }

    #[test]
    fn test_aircraft_quarter_speed() {
        for speed in [200.0, 476.0, 880.0] {
            let plane = time_to_travel(speed, 250.0, true).unwrap();
            let ground = time_to_travel(speed / 4.0, 250.0, false).unwrap();
            assert!((plane - ground).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_distance() {
        assert_eq!(time_to_travel(50.0, 0.0, false).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_speed_rejected() {
        assert_eq!(
            time_to_travel(0.0, 10.0, false),
            Err(CalcError::InvalidSpeed(0.0))
        );
    }

    #[test]
    fn test_negative_speed_rejected() {
        assert!(matches!(
            time_to_travel(-25.0, 10.0, true),
            Err(CalcError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn test_nan_speed_rejected() {
        assert!(time_to_travel(f64::NAN, 10.0, false).is_err());
    }

    #[test]
    fn test_subnormal_speed_rejected() {
        assert_eq!(
            time_to_travel(5e-324, 10.0, false),
            Err(CalcError::InvalidSpeed(5e-324))
        );
        assert!(matches!(
            time_to_travel(1e-323, 10.0, true),
            Err(CalcError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn test_overflowing_time_rejected() {
        assert!(matches!(
            time_to_travel(1e-300, f64::MAX, false),
            Err(CalcError::InvalidQuantity { field: "distance", .. })
        ));
    }

    #[test]
    fn test_negative_distance_rejected() {
        assert!(matches!(
            time_to_travel(50.0, -1.0, false),
            Err(CalcError::InvalidQuantity { field: "distance", .. })
        ));
    }
}
