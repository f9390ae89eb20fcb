use std::f64::consts::PI;

use crate::util::num::{f64_to_u64_exact, is_integral, u64_to_f64_checked};

/// Number of terms in Spouge's approximation.
const SPOUGE_A: u32 = 12;

/// Computes `x!`.
///
/// - Non-negative integers use the exact product `1 × 2 × … × x`. The product
///   stops growing once it overflows, so large arguments return infinity
///   quickly.
/// - Other non-negative values use `Γ(x + 1)`, see [`gamma_plus_one`].
/// - NaN propagates, positive infinity stays infinite.
///
/// Returns `None` for negative arguments, where the factorial is undefined.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::function::factorial::factorial;
///
/// assert_eq!(factorial(5.0), Some(120.0));
/// assert_eq!(factorial(0.0), Some(1.0));
/// assert_eq!(factorial(-1.0), None);
///
/// let half = factorial(0.5).unwrap();
/// assert!((half - std::f64::consts::PI.sqrt() / 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn factorial(x: f64) -> Option<f64> {
    if x.is_nan() {
        return Some(f64::NAN);
    }
    if x < 0.0 {
        return None;
    }
    if let Some(n) = f64_to_u64_exact(x) {
        return integer_factorial(n);
    }
    if is_integral(x) || x.is_infinite() {
        // Past 2^53 every product has long since overflowed.
        return Some(f64::INFINITY);
    }
    Some(gamma_plus_one(x))
}

fn integer_factorial(n: u64) -> Option<f64> {
    let mut result = 1.0_f64;
    for k in 2..=n {
        result *= u64_to_f64_checked(k)?;
        if result.is_infinite() {
            break;
        }
    }
    Some(result)
}

/// Spouge's approximation of `Γ(z + 1)` for `z >= 0`.
///
/// `Γ(z + 1) ≈ (z + a)^(z + 1/2) · e^-(z + a) · (c0 + Σ c_k / (z + k))` with
/// `c0 = √(2π)` and `c_k = (-1)^(k-1) / (k-1)! · (a - k)^(k - 1/2) · e^(a - k)`
/// for `k` in `1..a`. With `a = 12` the relative error stays below `1e-10`.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::function::factorial::gamma_plus_one;
///
/// // Γ(6) = 5! = 120
/// assert!((gamma_plus_one(5.0) - 120.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn gamma_plus_one(z: f64) -> f64 {
    let a = f64::from(SPOUGE_A);

    let mut series = (2.0 * PI).sqrt();
    let mut k_minus_one_factorial = 1.0;
    for step in 1..SPOUGE_A {
        let sign = if step % 2 == 1 { 1.0 } else { -1.0 };
        let k = f64::from(step);
        let coefficient =
            sign / k_minus_one_factorial * (a - k).powf(k - 0.5) * (a - k).exp();
        series += coefficient / (z + k);
        k_minus_one_factorial *= k;
    }

    // Combined in log space so the power does not overflow before the
    // exponential brings it back down.
    let shifted = z + a;
    ((z + 0.5) * shifted.ln() - shifted).exp() * series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!((actual - expected).abs() < tolerance,
                "expected {expected}, got {actual}");
    }

    #[test]
    fn small_integers_are_exact() {
        let expected = [1.0, 1.0, 2.0, 6.0, 24.0, 120.0, 720.0, 5040.0];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(factorial(n as f64), Some(*want), "{n}!");
        }
    }

    #[test]
    fn overflow_reaches_infinity() {
        assert!(factorial(170.0).unwrap().is_finite());
        assert_eq!(factorial(171.0), Some(f64::INFINITY));
        assert_eq!(factorial(1e15), Some(f64::INFINITY));
        assert_eq!(factorial(1e300), Some(f64::INFINITY));
    }

    #[test]
    fn negative_arguments_are_undefined() {
        assert_eq!(factorial(-1.0), None);
        assert_eq!(factorial(-0.5), None);
        assert_eq!(factorial(f64::NEG_INFINITY), None);
    }

    #[test]
    fn non_integers_follow_gamma() {
        // Γ(1.5) = √π / 2, Γ(2.5) = 3√π / 4, Γ(0.1 + 1) = 0.951350769866873...
        assert_close(factorial(0.5).unwrap(), PI.sqrt() / 2.0);
        assert_close(factorial(1.5).unwrap(), 3.0 * PI.sqrt() / 4.0);
        assert_close(factorial(0.1).unwrap(), 0.951_350_769_866_873_2);
    }

    #[test]
    fn spouge_agrees_with_exact_product() {
        for n in 1..=20_u32 {
            let exact = factorial(f64::from(n)).unwrap();
            assert_close(gamma_plus_one(f64::from(n)), exact);
        }
    }

    #[test]
    fn nan_propagates() {
        assert!(factorial(f64::NAN).unwrap().is_nan());
    }
}
