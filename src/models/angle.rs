use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An angle expressed in degrees.
///
/// Every angle that crosses a module boundary travels as `Degrees`; radians
/// only exist inside the trigonometric helpers below.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_radians(rad: f64) -> Self {
        Degrees(rad.to_degrees())
    }

    pub fn sin(self) -> f64 {
        self.radians().sin()
    }

    pub fn cos(self) -> f64 {
        self.radians().cos()
    }

    pub fn tan(self) -> f64 {
        self.radians().tan()
    }

    /// Inverse sine in degrees. The argument is clamped to [-1, 1] first so
    /// that floating-point overshoot (e.g. `1.0000000002`) yields ±90° instead
    /// of NaN.
    pub fn asin_clamped(x: f64) -> Self {
        Self::from_radians(x.clamp(-1.0, 1.0).asin())
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}
