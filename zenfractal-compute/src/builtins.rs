//! Hand-specialised recurrences.
//!
//! Each step function is written with the same operand grouping the parser
//! produces for the formula text in
//! [`zenfractal_core::BuiltinFractal::expression`], so the built-in and
//! expression paths perform identical floating point operations.

use zenfractal_core::{Complex, Scalar};

/// `z*z + c`
#[inline]
pub fn mandelbrot<S: Scalar>(z: &Complex<S>, c: &Complex<S>) -> Complex<S> {
    z * z + c
}

/// `(c+z)*z + z*z*z + c*z*z + z`
#[inline]
pub fn octopus<S: Scalar>(z: &Complex<S>, c: &Complex<S>) -> Complex<S> {
    (c + z) * z + z * z * z + c * z * z + z
}

/// `z*z*z*z + c`
#[inline]
pub fn quartic<S: Scalar>(z: &Complex<S>, c: &Complex<S>) -> Complex<S> {
    z * z * z * z + c
}
