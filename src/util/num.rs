/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `f64` to `u64` if the value is finite, non-negative, integral
/// and exactly representable.
///
/// # Example
/// ```
/// use pratt_calc::util::num::{MAX_SAFE_U64_INT, f64_to_u64_exact};
///
/// assert_eq!(f64_to_u64_exact(7.0), Some(7));
/// assert_eq!(f64_to_u64_exact(-5.0), None);
/// assert_eq!(f64_to_u64_exact(1.5), None);
/// assert_eq!(f64_to_u64_exact(f64::INFINITY), None);
/// assert_eq!(f64_to_u64_exact(1e300), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_exact(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as u64)
}

/// Converts a `u64` to `f64` if and only if it is exactly representable.
///
/// # Example
/// ```
/// use pratt_calc::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(1234), Some(1234.0));
/// assert_eq!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1), None);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64_checked(value: u64) -> Option<f64> {
    if value > MAX_SAFE_U64_INT {
        return None;
    }
    Some(value as f64)
}

/// Tests whether a finite value has no fractional part.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
