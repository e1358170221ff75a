//! Scalar abstraction for complex arithmetic.
//!
//! Lets the same recurrence, parser and escape-time code run over `f32`, `f64`
//! and [`BigFloat`](crate::BigFloat) without runtime dispatch.

use std::fmt::Debug;

/// Real number type a [`Complex`](crate::Complex) is built from.
///
/// Operations take references so arbitrary-precision values are never cloned
/// just to be combined.
pub trait Scalar: Clone + Debug + PartialEq + PartialOrd {
    /// Additive identity.
    fn zero() -> Self;

    /// Convert from f64. Used for pixel coordinates and the escape radius.
    fn from_f64(value: f64) -> Self;

    /// Lossy conversion back to f64 (display, screen mapping).
    fn to_f64(&self) -> f64;

    fn add(&self, other: &Self) -> Self;

    fn sub(&self, other: &Self) -> Self;

    fn mul(&self, other: &Self) -> Self;

    fn sqrt(&self) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    #[inline]
    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    #[inline]
    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }
}

impl Scalar for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    #[inline]
    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    #[inline]
    fn sqrt(&self) -> Self {
        f32::sqrt(*self)
    }
}
