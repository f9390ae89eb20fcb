//! Trigonometric functions take and return degrees.

/// Sine of an angle given in degrees.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::function::builtin::sin;
///
/// assert_eq!(sin(90.0), 1.0);
/// assert!((sin(30.0) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn sin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[must_use]
pub fn cos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Tangent of an angle given in degrees.
#[must_use]
pub fn tan(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

/// Arcsine in degrees. Outside `[-1, 1]` the result is NaN.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::function::builtin::asin;
///
/// assert!((asin(1.0) - 90.0).abs() < 1e-12);
/// assert!(asin(2.0).is_nan());
/// ```
#[must_use]
pub fn asin(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine in degrees. Outside `[-1, 1]` the result is NaN.
#[must_use]
pub fn acos(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Arctangent in degrees.
#[must_use]
pub fn atan(x: f64) -> f64 {
    x.atan().to_degrees()
}
