/// Numeric conversion helpers.
///
/// Safe conversions between `f64` and the integer types, used where an
/// evaluated value has to be treated as an exact integer (for example the
/// argument of a factorial).
pub mod num;
/// Result formatting.
///
/// Renders an evaluated value as fixed-point text with trailing zeros
/// removed, the way the command line prints results.
pub mod format;
