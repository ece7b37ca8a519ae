//! Speed presets and default sweep bounds

/// Selectable vehicle speeds (km/h), 50 to 275 in steps of 25
pub const SPEED_PRESETS: [f64; 10] = [
    50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 250.0, 275.0,
];

pub const DEFAULT_DISTANCE_MIN: u32 = 0;
pub const DEFAULT_DISTANCE_MAX: u32 = 500;
