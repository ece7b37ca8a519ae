//! Cargo kind type definitions

use serde::{Deserialize, Serialize};

/// Payment constants for one kind of cargo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoKind {
    /// Display name, unique within the catalog
    pub name: String,
    /// Currency per cargo unit per tile at maximum time bonus
    pub base_pay: u32,
    /// Days (formula units) during which the time bonus stays at maximum
    pub days1: u32,
    /// Days (formula units) over which the bonus decays before dropping faster
    pub days2: u32,
}

impl CargoKind {
    pub fn new(name: impl Into<String>, base_pay: u32, days1: u32, days2: u32) -> Self {
        Self {
            name: name.into(),
            base_pay,
            days1,
            days2,
        }
    }
}

impl std::fmt::Display for CargoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (base pay {}, days1 {}, days2 {})",
            self.name, self.base_pay, self.days1, self.days2
        )
    }
}
