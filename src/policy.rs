//! Validation policies for the vector types.
//!
//! Every vector type is generic over a [`ValidationPolicy`]. The policy is a
//! zero-sized marker resolved at compile time, so the checks of the
//! [`Strict`] policy cost nothing in code using the [`Fast`] policy.

use std::{fmt, hash::Hash};

mod sealed {
    pub trait Sealed {}
}

/// Determines whether a vector type validates the numeric preconditions of
/// its operations.
pub trait ValidationPolicy:
    sealed::Sealed
    + Copy
    + fmt::Debug
    + Default
    + PartialEq
    + Eq
    + Hash
    + Send
    + Sync
    + 'static
{
    /// Whether degenerate operands are detected and reported.
    const IS_STRICT: bool;

    /// Name of the policy, for diagnostics.
    const NAME: &'static str;
}

/// Checks degenerate operands and reports them as
/// [`VectorError`](crate::VectorError)s. Normalizing a zero vector gives the
/// zero vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Strict;

/// Performs no checks. Degenerate operands give NaN or infinite components
/// following IEEE 754 semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fast;

impl sealed::Sealed for Strict {}
impl sealed::Sealed for Fast {}

impl ValidationPolicy for Strict {
    const IS_STRICT: bool = true;
    const NAME: &'static str = "strict";
}

impl ValidationPolicy for Fast {
    const IS_STRICT: bool = false;
    const NAME: &'static str = "fast";
}
