//! Different units for angles.

use approx::{AbsDiffEq, RelativeEq};
use std::{f64::consts::PI, fmt};

/// An angle in degrees.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees(pub f64);

/// An angle in radians.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
    /// The value of the angle in degrees.
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// The value of the angle in radians.
    pub fn radians(self) -> f64 {
        Radians::from(self).0
    }
}

impl Radians {
    /// The value of the angle in degrees.
    pub fn degrees(self) -> f64 {
        Degrees::from(self).0
    }

    /// The value of the angle in radians.
    pub const fn radians(self) -> f64 {
        self.0
    }

    /// Whether the angle is NaN, which is what angles involving degenerate
    /// vectors evaluate to under the fast policy.
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(rad.0 * (180.0 / PI))
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(deg.0 * (PI / 180.0))
    }
}

impl AbsDiffEq for Radians {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

impl RelativeEq for Radians {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.0, &other.0, epsilon, max_relative)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.precision$}°", self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.precision$} rad", self.0)
    }
}
