use zenfractal_core::{BigFloat, Complex, CoreError, Scalar, DEFAULT_PRECISION_BITS};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn scalar_constructors_use_default_precision() {
    assert_eq!(<BigFloat as Scalar>::zero().precision_bits(), DEFAULT_PRECISION_BITS);
    assert_eq!(BigFloat::from_f64(0.25).precision_bits(), DEFAULT_PRECISION_BITS);
    assert_eq!(BigFloat::from_f64(0.25).to_f64(), 0.25);
}

#[test]
fn from_string_beyond_f64_range() {
    let tiny = BigFloat::from_string("1e-500", 2048).unwrap();
    assert_eq!(tiny.to_f64(), 0.0);
    assert!(tiny > <BigFloat as Scalar>::zero());
}

#[test]
fn from_string_rejects_garbage() {
    let err = BigFloat::from_string("1.2.3", 128).unwrap_err();
    assert!(matches!(err, CoreError::InvalidNumber { ref input, .. } if input == "1.2.3"));
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn resolves_differences_f64_cannot() {
    let one = BigFloat::from_string("1", 256).unwrap();
    let eps = BigFloat::from_string("1e-40", 256).unwrap();

    assert_eq!(1.0 + 1e-40, 1.0);
    let sum = one.add(&eps);
    assert!(sum > one);

    let back = sum.sub(&one).to_f64();
    assert!((back - 1e-40).abs() < 1e-52, "got {back}");
}

#[test]
fn multiply_and_sqrt() {
    let x = BigFloat::with_precision(1.5, 128);
    assert_eq!(x.mul(&x).to_f64(), 2.25);
    assert_eq!(BigFloat::with_precision(6.25, 128).sqrt().to_f64(), 2.5);
}

#[test]
fn complex_arithmetic_at_high_precision() {
    let z = Complex::<BigFloat>::from_f64_pair(1.0, 1.0);
    let c = Complex::<BigFloat>::from_f64_pair(0.5, 0.0);
    // (1 + i)² + 0.5 = 0.5 + 2i
    assert_eq!((&z * &z + &c).to_f64_pair(), (0.5, 2.0));
    assert_eq!(z.norm_sq().to_f64(), 2.0);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn json_round_trip_keeps_precision() {
    let original = BigFloat::with_precision(2.5, 192);
    let json = serde_json::to_string(&original).unwrap();
    let restored: BigFloat = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.precision_bits(), 192);
}
