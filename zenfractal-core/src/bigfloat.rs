use crate::{CoreError, Scalar};
use dashu_base::Approximation;
use dashu_float::ops::SquareRoot;
use dashu_float::{DBig, FBig};
use serde::{Deserialize, Serialize};

/// Precision used when a `BigFloat` is created without an explicit one,
/// e.g. the zero-initialised binding table or the escape radius.
pub const DEFAULT_PRECISION_BITS: usize = 128;

/// Arbitrary precision binary float, usable as a [`Scalar`].
///
/// Arithmetic between values of different precision yields the larger one, so
/// low-precision constants (like the escape radius) never truncate a
/// high-precision iterate.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct BigFloat {
    value: FBig,
}

impl BigFloat {
    /// Create from f64 with explicit precision. Non-finite input becomes zero,
    /// since FBig has no representation for NaN or infinity.
    pub fn with_precision(val: f64, precision_bits: usize) -> Self {
        let value = match FBig::try_from(val) {
            Ok(v) if val != 0.0 => v,
            _ => FBig::ZERO,
        };
        Self {
            value: value.with_precision(precision_bits).value(),
        }
    }

    pub fn zero(precision_bits: usize) -> Self {
        Self::with_precision(0.0, precision_bits)
    }

    pub fn precision_bits(&self) -> usize {
        self.value.precision()
    }

    /// Parse a decimal string (e.g. `"-0.743643887037158704752191506114774"`)
    /// at the given precision. Allows values beyond f64 range and precision.
    pub fn from_string(val: &str, precision_bits: usize) -> Result<Self, CoreError> {
        let decimal = val.trim().parse::<DBig>().map_err(|e| CoreError::InvalidNumber {
            input: val.to_string(),
            reason: e.to_string(),
        })?;
        let binary = match decimal.with_base_and_precision::<2>(precision_bits) {
            Approximation::Exact(v) => v,
            Approximation::Inexact(v, _) => v,
        };
        Ok(Self {
            value: binary.with_rounding::<dashu_float::round::mode::Zero>(),
        })
    }

    pub fn to_f64(&self) -> f64 {
        self.value.to_f64().value()
    }
}

impl Scalar for BigFloat {
    fn zero() -> Self {
        BigFloat::zero(DEFAULT_PRECISION_BITS)
    }

    fn from_f64(value: f64) -> Self {
        BigFloat::with_precision(value, DEFAULT_PRECISION_BITS)
    }

    fn to_f64(&self) -> f64 {
        BigFloat::to_f64(self)
    }

    fn add(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    fn sub(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    fn mul(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    fn sqrt(&self) -> Self {
        Self {
            value: SquareRoot::sqrt(&self.value),
        }
    }
}

impl std::fmt::Display for BigFloat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Serialize, Deserialize)]
struct BigFloatSerde {
    value: String,
    precision_bits: usize,
}

impl Serialize for BigFloat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        BigFloatSerde {
            value: self.value.to_string(),
            precision_bits: self.precision_bits(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BigFloat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let serde = BigFloatSerde::deserialize(deserializer)?;
        let value = serde
            .value
            .parse::<FBig>()
            .map_err(|e| serde::de::Error::custom(format!("Failed to parse FBig: {}", e)))?;
        Ok(BigFloat {
            value: value.with_precision(serde.precision_bits).value(),
        })
    }
}
