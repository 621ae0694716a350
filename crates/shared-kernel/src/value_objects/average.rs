// crates/shared-kernel/src/value_objects/average.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// A ratio rounded half-up to two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Average(f64);

impl Average {
    pub const ZERO: Self = Self(0.0);

    /// `numerator / denominator`, rounded. A zero denominator yields zero.
    pub fn of(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        Self::rounded(numerator as f64 / denominator as f64)
    }

    pub fn rounded(raw: f64) -> Self {
        Self((raw * 100.0).round() / 100.0)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
