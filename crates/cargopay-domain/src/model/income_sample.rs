use serde::{Deserialize, Serialize};

/// One row of the income dataset handed to the output layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeSample {
    /// Listed vehicle speed (km/h)
    pub speed: f64,
    /// Trip distance (tiles)
    pub distance: f64,
    /// Transit time (ingame days)
    pub time: f64,
    /// Revenue per trip for the delivered amount
    pub income: f64,
}
