/// Number of decimal places printed when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 9;

/// Formats a value as fixed-point text with `precision` decimals, then strips
/// trailing zeros and a dangling decimal point.
///
/// Negative zero, and negative values that round to zero, print as `0`.
/// Non-finite values are printed as `inf`, `-inf` or `NaN`.
///
/// # Example
/// ```
/// use pratt_calc::util::format::format_result;
///
/// assert_eq!(format_result(120.0, 9), "120");
/// assert_eq!(format_result(0.1 + 0.2, 9), "0.3");
/// assert_eq!(format_result(std::f64::consts::PI, 4), "3.1416");
/// assert_eq!(format_result(-0.0, 9), "0");
/// ```
#[must_use]
pub fn format_result(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }

    if text == "-0" {
        text.remove(0);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_decimal_point() {
        assert_eq!(format_result(512.0, DEFAULT_PRECISION), "512");
        assert_eq!(format_result(-3.0, DEFAULT_PRECISION), "-3");
    }

    #[test]
    fn rounds_to_precision() {
        assert_eq!(format_result(2.0 / 3.0, DEFAULT_PRECISION), "0.666666667");
        assert_eq!(format_result(1e-12, DEFAULT_PRECISION), "0");
        assert_eq!(format_result(-1e-12, DEFAULT_PRECISION), "0");
    }

    #[test]
    fn zero_precision_keeps_integer_part() {
        assert_eq!(format_result(2.6, 0), "3");
        assert_eq!(format_result(100.0, 0), "100");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_result(f64::INFINITY, DEFAULT_PRECISION), "inf");
        assert_eq!(format_result(f64::NAN, DEFAULT_PRECISION), "NaN");
    }
}
