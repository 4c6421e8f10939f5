//! Vectors.
//!
//! Every vector type is generic over a [`ValidationPolicy`]. Operations whose
//! result is undefined for degenerate operands return a [`Result`] for
//! [`Strict`] vectors and an IEEE NaN/infinite result for [`Fast`] vectors.

use crate::{
    angle::Radians,
    error::{Result, VectorError},
    kernel,
    policy::{Fast, Strict, ValidationPolicy},
};
use glam::{DVec2, DVec3, DVec4};
use std::{
    array, fmt,
    marker::PhantomData,
    ops::{Index, Mul},
};

/// Number of decimals used when displaying vector components, unless the
/// formatter specifies a precision.
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;

/// A 2-dimensional vector.
#[derive(Clone, Copy, PartialEq)]
pub struct Vector2<P: ValidationPolicy> {
    inner: DVec2,
    policy: PhantomData<P>,
}

/// A 3-dimensional vector.
#[derive(Clone, Copy, PartialEq)]
pub struct Vector3<P: ValidationPolicy> {
    inner: DVec3,
    policy: PhantomData<P>,
}

/// A 4-dimensional vector.
///
/// Supports arithmetic and interpolation, but no angle or projection
/// operations.
#[derive(Clone, Copy, PartialEq)]
pub struct Vector4<P: ValidationPolicy> {
    inner: DVec4,
    policy: PhantomData<P>,
}

pub type StrictVector2 = Vector2<Strict>;
pub type StrictVector3 = Vector3<Strict>;
pub type StrictVector4 = Vector4<Strict>;

pub type FastVector2 = Vector2<Fast>;
pub type FastVector3 = Vector3<Fast>;
pub type FastVector4 = Vector4<Fast>;

impl<P: ValidationPolicy> Vector2<P> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self::wrap(DVec2::new(x, y))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(DVec2::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::wrap(DVec2::splat(value))
    }

    /// Creates a new vector from the leading values of the given slice.
    /// Missing components are zero and surplus values are ignored.
    #[inline]
    pub fn from_components(components: &[f64]) -> Self {
        Self::wrap(DVec2::from_array(padded_components(components)))
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.inner.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f64) -> Vector3<P> {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Computes the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.inner.length()
    }

    /// Computes the square of the magnitude of the vector.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.inner.length_squared()
    }

    /// Computes the normalized version of the vector. For the zero vector,
    /// this gives the zero vector under the strict policy and NaN components
    /// under the fast policy.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(if P::IS_STRICT {
            self.inner.normalize_or_zero()
        } else {
            self.inner.normalize()
        })
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.inner.dot(other.inner)
    }

    /// Linearly interpolates from this vector towards `other`. The factor is
    /// not clamped.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::wrap(kernel::lerp(self.inner, other.inner, t))
    }

    /// Computes the Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.inner.distance(other.inner)
    }

    /// Reinterprets the vector under another validation policy.
    #[inline]
    pub fn into_policy<Q: ValidationPolicy>(self) -> Vector2<Q> {
        Vector2::wrap(self.inner)
    }

    #[inline]
    pub(crate) const fn wrap(inner: DVec2) -> Self {
        Self {
            inner,
            policy: PhantomData,
        }
    }
}

impl Vector2<Strict> {
    /// Projects this vector onto `other`.
    ///
    /// # Errors
    /// Returns [`VectorError::DegenerateProjectionTarget`] if `other` is the
    /// zero vector.
    #[inline]
    pub fn project(&self, other: &Self) -> Result<Self> {
        kernel::checked_project(self.inner, other.inner)
            .map(Self::wrap)
            .ok_or(VectorError::DegenerateProjectionTarget)
    }

    /// Computes the angle between this vector and `other`.
    ///
    /// # Errors
    /// Returns [`VectorError::DegenerateAngleOperands`] if either vector is the
    /// zero vector.
    #[inline]
    pub fn angle_between(&self, other: &Self) -> Result<Radians> {
        kernel::checked_angle_between(self.inner, other.inner)
            .map(Radians)
            .ok_or(VectorError::DegenerateAngleOperands)
    }
}

impl Vector2<Fast> {
    /// Projects this vector onto `other`. Gives NaN components if `other`
    /// has zero magnitude.
    #[inline]
    pub fn project(&self, other: &Self) -> Self {
        Self::wrap(kernel::project(self.inner, other.inner))
    }

    /// Computes the angle between this vector and `other`. Gives NaN if
    /// either vector has zero magnitude.
    #[inline]
    pub fn angle_between(&self, other: &Self) -> Radians {
        Radians(kernel::angle_between(self.inner, other.inner))
    }
}

impl<P: ValidationPolicy> Default for Vector2<P> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<P: ValidationPolicy> From<[f64; 2]> for Vector2<P> {
    #[inline]
    fn from(components: [f64; 2]) -> Self {
        Self::wrap(DVec2::from_array(components))
    }
}

impl<P: ValidationPolicy> From<Vector2<P>> for [f64; 2] {
    #[inline]
    fn from(vector: Vector2<P>) -> Self {
        vector.inner.to_array()
    }
}

impl_binop!(Add, add, Vector2<P>, Vector2<P>, Vector2<P>, |a, b| {
    Vector2::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector2<P>, Vector2<P>, Vector2<P>, |a, b| {
    Vector2::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector2<P>, f64, Vector2<P>, |a, b| {
    Vector2::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f64, Vector2<P>, Vector2<P>, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector2<P>, f64, Vector2<P>, |a, b| {
    Vector2::wrap(a.inner / *b)
});

impl_unary_op!(Neg, neg, Vector2<P>, Vector2<P>, |val| {
    Vector2::wrap(-val.inner)
});

impl<P: ValidationPolicy> Index<usize> for Vector2<P> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl_abs_diff_eq!(Vector2<P>, |a, b, epsilon| {
    components_abs_diff_eq(&a.inner.to_array(), &b.inner.to_array(), epsilon)
});

impl_relative_eq!(Vector2<P>, |a, b, epsilon, max_relative| {
    components_relative_eq(
        &a.inner.to_array(),
        &b.inner.to_array(),
        epsilon,
        max_relative,
    )
});

impl<P: ValidationPolicy> fmt::Debug for Vector2<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("policy", &format_args!("{}", P::NAME))
            .finish()
    }
}

impl<P: ValidationPolicy> fmt::Display for Vector2<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, "Vector2", &self.inner.to_array())
    }
}

impl<P: ValidationPolicy> Vector3<P> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::wrap(DVec3::new(x, y, z))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(DVec3::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::wrap(DVec3::splat(value))
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(DVec3::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(DVec3::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(DVec3::Z)
    }

    /// Creates a new vector from the leading values of the given slice.
    /// Missing components are zero and surplus values are ignored.
    #[inline]
    pub fn from_components(components: &[f64]) -> Self {
        Self::wrap(DVec3::from_array(padded_components(components)))
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.inner.z
    }

    /// The x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2<P> {
        Vector2::new(self.x(), self.y())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f64) -> Vector4<P> {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }

    /// Computes the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.inner.length()
    }

    /// Computes the square of the magnitude of the vector.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.inner.length_squared()
    }

    /// Computes the normalized version of the vector. For the zero vector,
    /// this gives the zero vector under the strict policy and NaN components
    /// under the fast policy.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(if P::IS_STRICT {
            self.inner.normalize_or_zero()
        } else {
            self.inner.normalize()
        })
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.inner.dot(other.inner)
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(self.inner.cross(other.inner))
    }

    /// Linearly interpolates from this vector towards `other`. The factor is
    /// not clamped.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::wrap(kernel::lerp(self.inner, other.inner, t))
    }

    /// Computes the Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.inner.distance(other.inner)
    }

    /// Reinterprets the vector under another validation policy.
    #[inline]
    pub fn into_policy<Q: ValidationPolicy>(self) -> Vector3<Q> {
        Vector3::wrap(self.inner)
    }

    #[inline]
    pub(crate) const fn wrap(inner: DVec3) -> Self {
        Self {
            inner,
            policy: PhantomData,
        }
    }
}

impl Vector3<Strict> {
    /// Projects this vector onto `other`.
    ///
    /// # Errors
    /// Returns [`VectorError::DegenerateProjectionTarget`] if `other` is the
    /// zero vector.
    #[inline]
    pub fn project(&self, other: &Self) -> Result<Self> {
        kernel::checked_project(self.inner, other.inner)
            .map(Self::wrap)
            .ok_or(VectorError::DegenerateProjectionTarget)
    }

    /// Removes the component of this vector along the given plane normal.
    ///
    /// # Errors
    /// Returns [`VectorError::DegenerateProjectionTarget`] if `normal` is the
    /// zero vector.
    #[inline]
    pub fn project_on_plane(&self, normal: &Self) -> Result<Self> {
        Ok(self - self.project(normal)?)
    }

    /// Computes the angle between this vector and `other`.
    ///
    /// # Errors
    /// Returns [`VectorError::DegenerateAngleOperands`] if either vector is the
    /// zero vector.
    #[inline]
    pub fn angle_between(&self, other: &Self) -> Result<Radians> {
        kernel::checked_angle_between(self.inner, other.inner)
            .map(Radians)
            .ok_or(VectorError::DegenerateAngleOperands)
    }
}

impl Vector3<Fast> {
    /// Projects this vector onto `other`. Gives NaN components if `other`
    /// has zero magnitude.
    #[inline]
    pub fn project(&self, other: &Self) -> Self {
        Self::wrap(kernel::project(self.inner, other.inner))
    }

    /// Removes the component of this vector along the given plane normal.
    /// Gives NaN components if `normal` has zero magnitude.
    #[inline]
    pub fn project_on_plane(&self, normal: &Self) -> Self {
        self - self.project(normal)
    }

    /// Computes the angle between this vector and `other`. Gives NaN if
    /// either vector has zero magnitude.
    #[inline]
    pub fn angle_between(&self, other: &Self) -> Radians {
        Radians(kernel::angle_between(self.inner, other.inner))
    }
}

impl<P: ValidationPolicy> Default for Vector3<P> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<P: ValidationPolicy> From<[f64; 3]> for Vector3<P> {
    #[inline]
    fn from(components: [f64; 3]) -> Self {
        Self::wrap(DVec3::from_array(components))
    }
}

impl<P: ValidationPolicy> From<Vector3<P>> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3<P>) -> Self {
        vector.inner.to_array()
    }
}

impl_binop!(Add, add, Vector3<P>, Vector3<P>, Vector3<P>, |a, b| {
    Vector3::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector3<P>, Vector3<P>, Vector3<P>, |a, b| {
    Vector3::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector3<P>, f64, Vector3<P>, |a, b| {
    Vector3::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f64, Vector3<P>, Vector3<P>, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector3<P>, f64, Vector3<P>, |a, b| {
    Vector3::wrap(a.inner / *b)
});

impl_unary_op!(Neg, neg, Vector3<P>, Vector3<P>, |val| {
    Vector3::wrap(-val.inner)
});

impl<P: ValidationPolicy> Index<usize> for Vector3<P> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl_abs_diff_eq!(Vector3<P>, |a, b, epsilon| {
    components_abs_diff_eq(&a.inner.to_array(), &b.inner.to_array(), epsilon)
});

impl_relative_eq!(Vector3<P>, |a, b, epsilon, max_relative| {
    components_relative_eq(
        &a.inner.to_array(),
        &b.inner.to_array(),
        epsilon,
        max_relative,
    )
});

impl<P: ValidationPolicy> fmt::Debug for Vector3<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("policy", &format_args!("{}", P::NAME))
            .finish()
    }
}

impl<P: ValidationPolicy> fmt::Display for Vector3<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, "Vector3", &self.inner.to_array())
    }
}

impl<P: ValidationPolicy> Vector4<P> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::wrap(DVec4::new(x, y, z, w))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(DVec4::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::wrap(DVec4::splat(value))
    }

    /// Creates a new vector from the leading values of the given slice.
    /// Missing components are zero and surplus values are ignored.
    #[inline]
    pub fn from_components(components: &[f64]) -> Self {
        Self::wrap(DVec4::from_array(padded_components(components)))
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.inner.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.inner.w
    }

    /// The x-, y- and z-components.
    #[inline]
    pub const fn xyz(&self) -> Vector3<P> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Computes the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.inner.length()
    }

    /// Computes the square of the magnitude of the vector.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.inner.length_squared()
    }

    /// Computes the normalized version of the vector. For the zero vector,
    /// this gives the zero vector under the strict policy and NaN components
    /// under the fast policy.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(if P::IS_STRICT {
            self.inner.normalize_or_zero()
        } else {
            self.inner.normalize()
        })
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.inner.dot(other.inner)
    }

    /// Linearly interpolates from this vector towards `other`. The factor is
    /// not clamped.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::wrap(kernel::lerp(self.inner, other.inner, t))
    }

    /// Computes the Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.inner.distance(other.inner)
    }

    /// Reinterprets the vector under another validation policy.
    #[inline]
    pub fn into_policy<Q: ValidationPolicy>(self) -> Vector4<Q> {
        Vector4::wrap(self.inner)
    }

    #[inline]
    pub(crate) const fn wrap(inner: DVec4) -> Self {
        Self {
            inner,
            policy: PhantomData,
        }
    }
}

impl<P: ValidationPolicy> Default for Vector4<P> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<P: ValidationPolicy> From<[f64; 4]> for Vector4<P> {
    #[inline]
    fn from(components: [f64; 4]) -> Self {
        Self::wrap(DVec4::from_array(components))
    }
}

impl<P: ValidationPolicy> From<Vector4<P>> for [f64; 4] {
    #[inline]
    fn from(vector: Vector4<P>) -> Self {
        vector.inner.to_array()
    }
}

impl_binop!(Add, add, Vector4<P>, Vector4<P>, Vector4<P>, |a, b| {
    Vector4::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector4<P>, Vector4<P>, Vector4<P>, |a, b| {
    Vector4::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector4<P>, f64, Vector4<P>, |a, b| {
    Vector4::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f64, Vector4<P>, Vector4<P>, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector4<P>, f64, Vector4<P>, |a, b| {
    Vector4::wrap(a.inner / *b)
});

impl_unary_op!(Neg, neg, Vector4<P>, Vector4<P>, |val| {
    Vector4::wrap(-val.inner)
});

impl<P: ValidationPolicy> Index<usize> for Vector4<P> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl_abs_diff_eq!(Vector4<P>, |a, b, epsilon| {
    components_abs_diff_eq(&a.inner.to_array(), &b.inner.to_array(), epsilon)
});

impl_relative_eq!(Vector4<P>, |a, b, epsilon, max_relative| {
    components_relative_eq(
        &a.inner.to_array(),
        &b.inner.to_array(),
        epsilon,
        max_relative,
    )
});

impl<P: ValidationPolicy> fmt::Debug for Vector4<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .field("policy", &format_args!("{}", P::NAME))
            .finish()
    }
}

impl<P: ValidationPolicy> fmt::Display for Vector4<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, "Vector4", &self.inner.to_array())
    }
}

fn padded_components<const N: usize>(components: &[f64]) -> [f64; N] {
    array::from_fn(|idx| components.get(idx).copied().unwrap_or(0.0))
}

fn components_abs_diff_eq(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    a.iter()
        .zip(b)
        .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
}

fn components_relative_eq(a: &[f64], b: &[f64], epsilon: f64, max_relative: f64) -> bool {
    a.iter()
        .zip(b)
        .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
}

/// Writes `name(c0, c1, ...)` with each component in fixed-point notation.
fn fmt_components(f: &mut fmt::Formatter<'_>, name: &str, components: &[f64]) -> fmt::Result {
    let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
    write!(f, "{name}(")?;
    for (idx, component) in components.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{component:.precision$}")?;
    }
    f.write_str(")")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    // === Vector2 Tests ===

    #[test]
    fn vector2_arithmetic_matches_reference_values() {
        let a = StrictVector2::new(2.0, -3.0);
        let b = StrictVector2::new(1.0, 2.5);

        assert_eq!(&a + &b, StrictVector2::new(3.0, -0.5));
        assert_eq!(&a - &b, StrictVector2::new(1.0, -5.5));
        assert_eq!(a.dot(&b), -5.5);
        assert_abs_diff_eq!(a.magnitude(), 3.6056, epsilon = 1e-4);
        assert_abs_diff_eq!(a.distance_to(&b), 5.5902, epsilon = 1e-4);
    }

    #[test]
    fn vector2_scalar_operations_work() {
        let v = FastVector2::new(1.0, 2.0);
        assert_eq!(&v * 2.0, FastVector2::new(2.0, 4.0));
        assert_eq!(3.0 * &v, FastVector2::new(3.0, 6.0));
        assert_eq!(v * 3.0, 3.0 * v);
        assert_eq!(&v / 2.0, FastVector2::new(0.5, 1.0));
        assert_eq!(-&v, FastVector2::new(-1.0, -2.0));
    }

    #[test]
    fn dividing_vector2_by_zero_is_not_special_cased() {
        let strict = StrictVector2::new(1.0, 0.0) / 0.0;
        assert_eq!(strict.x(), f64::INFINITY);
        assert!(strict.y().is_nan());

        let fast = FastVector2::new(-1.0, 0.0) / 0.0;
        assert_eq!(fast.x(), f64::NEG_INFINITY);
        assert!(fast.y().is_nan());
    }

    #[test]
    fn vector2_missing_components_default_to_zero() {
        assert_eq!(StrictVector2::from_components(&[]), StrictVector2::zeros());
        assert_eq!(
            StrictVector2::from_components(&[4.0]),
            StrictVector2::new(4.0, 0.0)
        );
        assert_eq!(
            FastVector2::from_components(&[4.0, 5.0, 6.0]),
            FastVector2::new(4.0, 5.0)
        );
        assert_eq!(FastVector2::default(), FastVector2::zeros());
    }

    #[test]
    fn strict_vector2_projection_works() {
        let v = StrictVector2::new(3.0, 4.0);
        let onto = StrictVector2::new(2.0, 0.0);
        assert_eq!(v.project(&onto).unwrap(), StrictVector2::new(3.0, 0.0));
    }

    #[test]
    fn strict_vector2_projection_onto_zero_vector_fails() {
        let v = StrictVector2::new(3.0, 4.0);
        assert_eq!(
            v.project(&StrictVector2::zeros()),
            Err(VectorError::DegenerateProjectionTarget)
        );
    }

    #[test]
    fn fast_vector2_projection_onto_zero_vector_gives_nan() {
        let projected = FastVector2::new(3.0, 4.0).project(&FastVector2::zeros());
        assert!(projected.x().is_nan());
        assert!(projected.y().is_nan());
    }

    #[test]
    fn vector2_angle_between_perpendicular_vectors_is_right_angle() {
        let a = StrictVector2::new(1.0, 0.0);
        let b = StrictVector2::new(0.0, 5.0);
        assert_abs_diff_eq!(a.angle_between(&b).unwrap().degrees(), 90.0, epsilon = EPSILON);
    }

    #[test]
    fn strict_vector2_angle_with_zero_vector_fails() {
        let a = StrictVector2::new(1.0, 0.0);
        assert_eq!(
            a.angle_between(&StrictVector2::zeros()),
            Err(VectorError::DegenerateAngleOperands)
        );
        assert_eq!(
            StrictVector2::zeros().angle_between(&a),
            Err(VectorError::DegenerateAngleOperands)
        );
    }

    #[test]
    fn fast_vector2_angle_with_zero_vector_is_nan() {
        let a = FastVector2::new(1.0, 0.0);
        assert!(a.angle_between(&FastVector2::zeros()).is_nan());
    }

    #[test]
    fn vector2_indexing_works() {
        let v = FastVector2::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
    }

    #[test]
    #[should_panic]
    fn indexing_vector2_out_of_bounds_panics() {
        let v = FastVector2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn vector2_is_displayed_with_two_decimals() {
        assert_eq!(
            StrictVector2::new(2.0, -3.0).to_string(),
            "Vector2(2.00, -3.00)"
        );
        assert_eq!(
            FastVector2::new(1.0 / 3.0, 2.5).to_string(),
            "Vector2(0.33, 2.50)"
        );
    }

    #[test]
    fn extending_vector2_to_vector3_works() {
        let v = StrictVector2::new(1.0, 2.0).extended(3.0);
        assert_eq!(v, StrictVector3::new(1.0, 2.0, 3.0));
    }

    // === Vector3 Tests ===

    #[test]
    fn vector3_cross_product_matches_reference_value() {
        let a = StrictVector3::new(2.0, -3.0, 1.0);
        let b = StrictVector3::new(1.0, 2.5, -1.0);
        assert_eq!(a.cross(&b), StrictVector3::new(0.5, 3.0, 8.0));
    }

    #[test]
    fn vector3_cross_product_of_itself_is_zero() {
        let v = FastVector3::new(1.5, -2.0, 7.25);
        assert_eq!(v.cross(&v), FastVector3::zeros());
    }

    #[test]
    fn vector3_cross_product_of_axes_is_right_handed() {
        assert_eq!(
            StrictVector3::unit_x().cross(&StrictVector3::unit_y()),
            StrictVector3::unit_z()
        );
    }

    #[test]
    fn vector3_arithmetic_operations_work() {
        let v1 = FastVector3::new(1.0, 2.0, 3.0);
        let v2 = FastVector3::new(4.0, 5.0, 6.0);

        assert_eq!(&v1 + &v2, FastVector3::new(5.0, 7.0, 9.0));
        assert_eq!(&v1 - &v2, FastVector3::new(-3.0, -3.0, -3.0));
        assert_eq!(&v1 * 2.0, FastVector3::new(2.0, 4.0, 6.0));
        assert_eq!(3.0 * &v1, FastVector3::new(3.0, 6.0, 9.0));
        assert_eq!(&v1 / 2.0, FastVector3::new(0.5, 1.0, 1.5));
        assert_eq!(-&v1, FastVector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn normalizing_zero_vector3_depends_on_policy() {
        assert_eq!(StrictVector3::zeros().normalized(), StrictVector3::zeros());

        let normalized = FastVector3::zeros().normalized();
        assert!(normalized.x().is_nan());
        assert!(normalized.y().is_nan());
        assert!(normalized.z().is_nan());
    }

    #[test]
    fn normalizing_vector3_gives_unit_vector() {
        let v = StrictVector3::new(2.0, 0.0, 0.0);
        assert_eq!(v.normalized(), StrictVector3::unit_x());
    }

    #[test]
    fn vector3_projection_on_plane_removes_normal_component() {
        let v = StrictVector3::new(3.0, -4.0, 5.0);
        let normal = StrictVector3::new(0.0, 0.0, 2.0);
        assert_eq!(
            v.project_on_plane(&normal).unwrap(),
            StrictVector3::new(3.0, -4.0, 0.0)
        );

        let fast = v.into_policy::<Fast>();
        assert_eq!(
            fast.project_on_plane(&normal.into_policy()),
            FastVector3::new(3.0, -4.0, 0.0)
        );
    }

    #[test]
    fn vector3_projection_on_plane_with_zero_normal_depends_on_policy() {
        let v = StrictVector3::new(3.0, -4.0, 5.0);
        assert_eq!(
            v.project_on_plane(&StrictVector3::zeros()),
            Err(VectorError::DegenerateProjectionTarget)
        );

        let projected = v
            .into_policy::<Fast>()
            .project_on_plane(&FastVector3::zeros());
        assert!(projected.x().is_nan());
    }

    #[test]
    fn vector3_angle_between_opposite_vectors_is_pi() {
        let v = StrictVector3::new(0.3, -1.2, 2.2);
        assert_eq!(v.angle_between(&v).unwrap(), Radians(0.0));
        assert_abs_diff_eq!(v.angle_between(&-v).unwrap(), Radians(PI), epsilon = 1e-6);

        let v = v.into_policy::<Fast>();
        assert_eq!(v.angle_between(&v), Radians(0.0));
        assert_abs_diff_eq!(v.angle_between(&-v), Radians(PI), epsilon = 1e-6);
    }

    #[test]
    fn angle_between_huge_vectors_is_accurate_for_both_policies() {
        let a = StrictVector2::new(1e100, 0.0);
        let b = StrictVector2::new(0.0, 1e100);
        assert_eq!(a.angle_between(&a).unwrap(), Radians(0.0));
        assert_eq!(a.angle_between(&-a).unwrap(), Radians(PI));
        assert_abs_diff_eq!(a.angle_between(&b).unwrap(), Radians(PI / 2.0), epsilon = EPSILON);

        let a = a.into_policy::<Fast>();
        let b = b.into_policy::<Fast>();
        assert_eq!(a.angle_between(&a), Radians(0.0));
        assert_eq!(a.angle_between(&-a), Radians(PI));
        assert_abs_diff_eq!(a.angle_between(&b), Radians(PI / 2.0), epsilon = EPSILON);
    }

    #[test]
    fn angle_between_tiny_vectors_is_accurate_for_both_policies() {
        let a = StrictVector3::new(1e-100, 0.0, 0.0);
        let b = StrictVector3::new(0.0, 1e-100, 0.0);
        assert_eq!(a.angle_between(&a), Ok(Radians(0.0)));
        assert_abs_diff_eq!(a.angle_between(&b).unwrap(), Radians(PI / 2.0), epsilon = EPSILON);

        let a = a.into_policy::<Fast>();
        let b = b.into_policy::<Fast>();
        assert_eq!(a.angle_between(&a), Radians(0.0));
        assert_abs_diff_eq!(a.angle_between(&b), Radians(PI / 2.0), epsilon = EPSILON);
    }

    #[test]
    fn projection_onto_tiny_vector_is_accurate() {
        let v = StrictVector3::new(3.0, -4.0, 5.0);
        let onto = StrictVector3::new(0.0, 1e-200, 0.0);
        assert_eq!(v.project(&onto).unwrap(), StrictVector3::new(0.0, -4.0, 0.0));
        assert_eq!(
            v.project_on_plane(&onto).unwrap(),
            StrictVector3::new(3.0, 0.0, 5.0)
        );
    }

    #[test]
    fn vector3_swizzling_and_extension_work() {
        let v = FastVector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.xy(), FastVector2::new(1.0, 2.0));
        assert_eq!(v.extended(4.0), FastVector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.extended(4.0).xyz(), v);
    }

    #[test]
    fn vector3_converts_to_and_from_arrays() {
        let v = StrictVector3::from([1.0, 2.0, 3.0]);
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn vector3_is_displayed_with_configurable_precision() {
        let v = FastVector3::new(2.0, -3.0, 1.0 / 3.0);
        assert_eq!(v.to_string(), "Vector3(2.00, -3.00, 0.33)");
        assert_eq!(
            format!("{v:.8}"),
            "Vector3(2.00000000, -3.00000000, 0.33333333)"
        );
    }

    #[test]
    fn vector3_debug_output_names_policy() {
        let v = StrictVector3::new(1.0, 2.0, 3.0);
        assert_eq!(
            format!("{v:?}"),
            "Vector3 { x: 1.0, y: 2.0, z: 3.0, policy: strict }"
        );
    }

    // === Vector4 Tests ===

    #[test]
    fn vector4_arithmetic_operations_work() {
        let v1 = StrictVector4::new(1.0, 2.0, 3.0, 4.0);
        let v2 = StrictVector4::new(5.0, 6.0, 7.0, 8.0);

        assert_eq!(&v1 + &v2, StrictVector4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(&v2 - &v1, StrictVector4::same(4.0));
        assert_eq!(2.0 * &v1, StrictVector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(&v1 / 4.0, StrictVector4::new(0.25, 0.5, 0.75, 1.0));
        assert_eq!(v1.dot(&v2), 70.0);
    }

    #[test]
    fn vector4_lerp_extrapolates() {
        let a = FastVector4::zeros();
        let b = FastVector4::same(2.0);
        assert_eq!(a.lerp(&b, 0.5), FastVector4::same(1.0));
        assert_eq!(a.lerp(&b, 2.0), FastVector4::same(4.0));
        assert_eq!(a.lerp(&b, -1.0), FastVector4::same(-2.0));
    }

    #[test]
    fn normalizing_zero_vector4_depends_on_policy() {
        assert_eq!(StrictVector4::zeros().normalized(), StrictVector4::zeros());
        assert!(FastVector4::zeros().normalized().w().is_nan());
    }

    #[test]
    fn vector4_magnitude_and_distance_work() {
        let v = StrictVector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.magnitude(), 2.0);
        assert_eq!(v.magnitude_squared(), 4.0);
        assert_eq!(v.distance_to(&StrictVector4::zeros()), 2.0);
    }

    #[test]
    fn vector4_is_displayed_with_two_decimals() {
        assert_eq!(
            StrictVector4::new(2.0, -3.0, 1.0, 0.0).to_string(),
            "Vector4(2.00, -3.00, 1.00, 0.00)"
        );
    }

    // === Properties ===

    prop_compose! {
        fn vector2_strategy()(x in -1e3..1e3, y in -1e3..1e3) -> StrictVector2 {
            StrictVector2::new(x, y)
        }
    }

    prop_compose! {
        fn vector3_strategy()(
            x in -1e3..1e3,
            y in -1e3..1e3,
            z in -1e3..1e3,
        ) -> StrictVector3 {
            StrictVector3::new(x, y, z)
        }
    }

    prop_compose! {
        fn vector4_strategy()(
            x in -1e3..1e3,
            y in -1e3..1e3,
            z in -1e3..1e3,
            w in -1e3..1e3,
        ) -> FastVector4 {
            FastVector4::new(x, y, z, w)
        }
    }

    proptest! {
        #[test]
        fn adding_and_subtracting_same_vector_round_trips(a in vector3_strategy(), b in vector3_strategy()) {
            prop_assert!(approx::abs_diff_eq!(&a + &b - &b, a, epsilon = 1e-9));
        }
    }

    prop_compose! {
        fn wide_range_vector3_strategy()(
            x in prop::num::f64::NORMAL,
            y in prop::num::f64::NORMAL,
            z in prop::num::f64::NORMAL,
        ) -> FastVector3 {
            FastVector3::new(x, y, z)
        }
    }

    proptest! {
        #[test]
        fn adding_and_subtracting_same_vector2_round_trips(a in vector2_strategy(), b in vector2_strategy()) {
            prop_assert!(approx::abs_diff_eq!(&a + &b - &b, a, epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn adding_and_subtracting_same_vector4_round_trips(a in vector4_strategy(), b in vector4_strategy()) {
            prop_assert!(approx::abs_diff_eq!(&a + &b - &b, a, epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn normalized_vector_has_unit_magnitude(v in vector3_strategy()) {
            prop_assume!(v.magnitude() > 1e-6);
            prop_assert!(approx::abs_diff_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-6));
            prop_assert!(approx::abs_diff_eq!(
                v.into_policy::<Fast>().normalized().magnitude(),
                1.0,
                epsilon = 1e-6
            ));
        }
    }

    proptest! {
        #[test]
        fn dot_product_is_commutative(a in vector2_strategy(), b in vector2_strategy()) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }
    }

    proptest! {
        #[test]
        fn cross_product_is_anticommutative(a in vector3_strategy(), b in vector3_strategy()) {
            prop_assert_eq!(a.cross(&b), -b.cross(&a));
            prop_assert_eq!(a.cross(&a), StrictVector3::zeros());
        }
    }

    proptest! {
        #[test]
        fn cross_product_matches_nalgebra(a in vector3_strategy(), b in vector3_strategy()) {
            let expected = nalgebra::Vector3::new(a.x(), a.y(), a.z())
                .cross(&nalgebra::Vector3::new(b.x(), b.y(), b.z()));
            let cross = a.cross(&b);
            prop_assert!(approx::abs_diff_eq!(cross.x(), expected.x, epsilon = 1e-9));
            prop_assert!(approx::abs_diff_eq!(cross.y(), expected.y, epsilon = 1e-9));
            prop_assert!(approx::abs_diff_eq!(cross.z(), expected.z, epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn lerp_endpoints_are_exact(a in vector4_strategy(), b in vector4_strategy()) {
            prop_assert_eq!(a.lerp(&b, 0.0), a);
            prop_assert_eq!(a.lerp(&b, 1.0), b);
        }
    }

    proptest! {
        #[test]
        fn angle_with_itself_is_zero_and_with_negation_is_pi(v in vector2_strategy()) {
            prop_assume!(v.magnitude() > 1e-6);
            prop_assert_eq!(v.angle_between(&v).unwrap(), Radians(0.0));
            prop_assert!(approx::abs_diff_eq!(v.angle_between(&-v).unwrap().radians(), PI, epsilon = 1e-6));
        }
    }

    proptest! {
        #[test]
        fn angle_with_itself_is_zero_and_with_negation_is_pi_at_any_scale(v in wide_range_vector3_strategy()) {
            prop_assert_eq!(v.angle_between(&v), Radians(0.0));
            prop_assert!(approx::abs_diff_eq!(v.angle_between(&-v).radians(), PI, epsilon = 1e-12));
        }
    }

    proptest! {
        #[test]
        fn projection_matches_nalgebra(a in vector3_strategy(), b in vector3_strategy()) {
            prop_assume!(b.magnitude() > 1e-3);
            let na_a = nalgebra::Vector3::new(a.x(), a.y(), a.z());
            let na_b = nalgebra::Vector3::new(b.x(), b.y(), b.z());
            let expected = na_b * (na_a.dot(&na_b) / na_b.norm_squared());
            let projected = a.project(&b).unwrap();
            let tolerance = 1e-9 * expected.norm().max(1.0);
            prop_assert!(approx::abs_diff_eq!(projected.x(), expected.x, epsilon = tolerance));
            prop_assert!(approx::abs_diff_eq!(projected.y(), expected.y, epsilon = tolerance));
            prop_assert!(approx::abs_diff_eq!(projected.z(), expected.z, epsilon = tolerance));
        }
    }
}
