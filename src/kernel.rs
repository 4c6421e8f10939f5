//! Vector math whose handling of degenerate or extreme operands differs from
//! what [`glam`] provides.
//!
//! The functions perform no validation. The vector types decide how
//! degenerate operands are handled.

use glam::{DVec2, DVec3, DVec4};
use std::ops::{Add, Div, Mul};

/// The [`glam`] vector types backing the vector types of this crate.
pub trait GlamVector:
    Copy + Add<Output = Self> + Mul<f64, Output = Self> + Div<f64, Output = Self>
{
    fn dot(self, other: Self) -> f64;

    fn length_squared(self) -> f64;

    /// The largest absolute value of any component.
    fn max_abs_component(self) -> f64;
}

macro_rules! impl_glam_vector {
    ($t:ty) => {
        impl GlamVector for $t {
            #[inline]
            fn dot(self, other: Self) -> f64 {
                <$t>::dot(self, other)
            }

            #[inline]
            fn length_squared(self) -> f64 {
                <$t>::length_squared(self)
            }

            #[inline]
            fn max_abs_component(self) -> f64 {
                self.abs().max_element()
            }
        }
    };
}

impl_glam_vector!(DVec2);
impl_glam_vector!(DVec3);
impl_glam_vector!(DVec4);

/// Linearly interpolates between `a` and `b`. The factor is not clamped, so
/// values outside [0, 1] extrapolate. A factor of exactly 0 or 1 reproduces
/// `a` or `b` exactly for finite components.
#[inline]
pub fn lerp<V: GlamVector>(a: V, b: V, t: f64) -> V {
    a * (1.0 - t) + b * t
}

/// Projects `a` onto `b`. Gives NaN components when `b` is the zero vector.
#[inline]
pub fn project<V: GlamVector>(a: V, b: V) -> V {
    let b = rescaled(b);
    b * (a.dot(b) / b.length_squared())
}

/// Projects `a` onto `b`, or returns [`None`] if `b` is the zero vector.
#[inline]
pub fn checked_project<V: GlamVector>(a: V, b: V) -> Option<V> {
    if is_zero(b) {
        None
    } else {
        Some(project(a, b))
    }
}

/// Computes the angle in radians between `a` and `b`. The cosine is clamped
/// to [-1, 1] before taking the arccosine. Gives NaN when either vector is
/// the zero vector.
#[inline]
pub fn angle_between<V: GlamVector>(a: V, b: V) -> f64 {
    let a = rescaled(a);
    let b = rescaled(b);
    // A single square root of the squared lengths makes the cosine exactly 1
    // for `angle_between(v, v)` and exactly -1 for `angle_between(v, -v)`.
    let cosine = a.dot(b) / (a.length_squared() * b.length_squared()).sqrt();
    cosine.clamp(-1.0, 1.0).acos()
}

/// Like [`angle_between`], but returns [`None`] if either vector is the zero
/// vector.
#[inline]
pub fn checked_angle_between<V: GlamVector>(a: V, b: V) -> Option<f64> {
    if is_zero(a) || is_zero(b) {
        None
    } else {
        Some(angle_between(a, b))
    }
}

#[inline]
fn is_zero<V: GlamVector>(v: V) -> bool {
    v.max_abs_component() == 0.0
}

// Dividing by the largest absolute component keeps squared lengths and dot
// products of the result in range for any finite non-zero vector.
#[inline]
fn rescaled<V: GlamVector>(v: V) -> V {
    v / v.max_abs_component()
}
