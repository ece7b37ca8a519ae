//! Inclusive integer distance range swept by the series generator

use cargopay_types::CalcError;
use serde::{Deserialize, Serialize};

/// Inclusive range of distances in tiles, `lo <= hi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct DistanceRange {
    lo: u32,
    hi: u32,
}

impl DistanceRange {
    pub fn new(lo: u32, hi: u32) -> Result<Self, CalcError> {
        if lo > hi {
            return Err(CalcError::InvalidDistanceRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> u32 {
        self.lo
    }

    pub fn hi(&self) -> u32 {
        self.hi
    }

    /// Number of integer distances in the range
    pub fn len(&self) -> usize {
        (self.hi - self.lo) as usize + 1
    }

    /// Always false, a valid range holds at least one distance
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Distances in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.lo..=self.hi
    }
}

impl TryFrom<(u32, u32)> for DistanceRange {
    type Error = CalcError;

    fn try_from((lo, hi): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(lo, hi)
    }
}

impl From<DistanceRange> for (u32, u32) {
    fn from(range: DistanceRange) -> Self {
        (range.lo, range.hi)
    }
}

impl std::fmt::Display for DistanceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.lo, self.hi)
    }
}
