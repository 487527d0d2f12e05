use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A length in meters.
///
/// Host records store dimensions in centimeters; convert them with
/// [`Meters::from_centimeters`] before they reach the calculators.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl Meters {
    /// Creates a length from a value in meters.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Creates a length from a value in centimeters.
    #[must_use]
    pub fn from_centimeters(cm: f64) -> Self {
        Self(cm / 100.0)
    }

    /// Returns the raw value in meters.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` if the length is finite and strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Add for Meters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

/// Length times length is an area in square meters.
impl Mul for Meters {
    type Output = f64;

    fn mul(self, rhs: Self) -> f64 {
        self.0 * rhs.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}
