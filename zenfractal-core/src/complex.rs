//! Generic complex number used by every recurrence.

use crate::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Complex number over any [`Scalar`].
///
/// A plain value type: arithmetic always produces a new value, and compound
/// assignment replaces `self` with the result of the binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Complex<S> {
    pub re: S,
    pub im: S,
}

impl<S: Scalar> Complex<S> {
    pub fn new(re: S, im: S) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self {
            re: S::zero(),
            im: S::zero(),
        }
    }

    pub fn from_f64_pair(re: f64, im: f64) -> Self {
        Self {
            re: S::from_f64(re),
            im: S::from_f64(im),
        }
    }

    pub fn to_f64_pair(&self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }

    /// Multiply both components by a scalar.
    #[inline]
    pub fn scale(&self, factor: &S) -> Self {
        Self {
            re: self.re.mul(factor),
            im: self.im.mul(factor),
        }
    }

    /// Squared magnitude `re² + im²`. The escape test compares this against the
    /// squared radius so the hot loop never takes a square root.
    #[inline]
    pub fn norm_sq(&self) -> S {
        self.re.mul(&self.re).add(&self.im.mul(&self.im))
    }

    /// Magnitude `sqrt(re² + im²)`.
    pub fn norm(&self) -> S {
        self.norm_sq().sqrt()
    }
}

impl<S: Scalar> Default for Complex<S> {
    fn default() -> Self {
        Self::zero()
    }
}

#[inline]
fn complex_add<S: Scalar>(lhs: &Complex<S>, rhs: &Complex<S>) -> Complex<S> {
    Complex {
        re: lhs.re.add(&rhs.re),
        im: lhs.im.add(&rhs.im),
    }
}

#[inline]
fn complex_sub<S: Scalar>(lhs: &Complex<S>, rhs: &Complex<S>) -> Complex<S> {
    Complex {
        re: lhs.re.sub(&rhs.re),
        im: lhs.im.sub(&rhs.im),
    }
}

// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
#[inline]
fn complex_mul<S: Scalar>(lhs: &Complex<S>, rhs: &Complex<S>) -> Complex<S> {
    Complex {
        re: lhs.re.mul(&rhs.re).sub(&lhs.im.mul(&rhs.im)),
        im: lhs.re.mul(&rhs.im).add(&rhs.re.mul(&lhs.im)),
    }
}

/// Implements a binary operator for every owned/borrowed operand combination.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $func:ident) => {
        impl<S: Scalar> $trait<Complex<S>> for Complex<S> {
            type Output = Complex<S>;

            #[inline]
            fn $method(self, rhs: Complex<S>) -> Complex<S> {
                $func(&self, &rhs)
            }
        }

        impl<'a, S: Scalar> $trait<&'a Complex<S>> for Complex<S> {
            type Output = Complex<S>;

            #[inline]
            fn $method(self, rhs: &'a Complex<S>) -> Complex<S> {
                $func(&self, rhs)
            }
        }

        impl<'a, S: Scalar> $trait<Complex<S>> for &'a Complex<S> {
            type Output = Complex<S>;

            #[inline]
            fn $method(self, rhs: Complex<S>) -> Complex<S> {
                $func(self, &rhs)
            }
        }

        impl<'a, 'b, S: Scalar> $trait<&'b Complex<S>> for &'a Complex<S> {
            type Output = Complex<S>;

            #[inline]
            fn $method(self, rhs: &'b Complex<S>) -> Complex<S> {
                $func(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, complex_add);
impl_binary_op!(Sub, sub, complex_sub);
impl_binary_op!(Mul, mul, complex_mul);

impl<S: Scalar> AddAssign<&Complex<S>> for Complex<S> {
    fn add_assign(&mut self, rhs: &Complex<S>) {
        *self = complex_add(self, rhs);
    }
}

impl<S: Scalar> SubAssign<&Complex<S>> for Complex<S> {
    fn sub_assign(&mut self, rhs: &Complex<S>) {
        *self = complex_sub(self, rhs);
    }
}

impl<S: Scalar> MulAssign<&Complex<S>> for Complex<S> {
    fn mul_assign(&mut self, rhs: &Complex<S>) {
        *self = complex_mul(self, rhs);
    }
}

impl<S: fmt::Display> fmt::Display for Complex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}i)", self.re, self.im)
    }
}
