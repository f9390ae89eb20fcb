use crate::util::format::DEFAULT_PRECISION;

/// Default bound on evaluator recursion.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Default number of errors shown per expression.
pub const DEFAULT_MAX_REPORTED_ERRORS: usize = 10;

/// Tunables of a [`Calculator`](crate::Calculator) and the session around it.
///
/// # Example
/// ```
/// use pratt_calc::config::Settings;
///
/// let settings = Settings::default().with_precision(3).with_seed(Some(7));
/// assert_eq!(settings.precision, 3);
/// assert_eq!(settings.max_depth, 256);
/// assert_eq!(settings.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Deepest nesting the evaluator follows before giving up with
    /// [`CalcError::NestingTooDeep`](crate::error::CalcError::NestingTooDeep).
    pub max_depth:           usize,
    /// Decimal places printed for results.
    pub precision:           usize,
    /// Errors shown per expression; the report itself keeps all of them.
    pub max_reported_errors: usize,
    /// Seed for `rand`. Seeded from the operating system when `None`.
    pub seed:                Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { max_depth:           DEFAULT_MAX_DEPTH,
               precision:           DEFAULT_PRECISION,
               max_reported_errors: DEFAULT_MAX_REPORTED_ERRORS,
               seed:                None, }
    }
}

impl Settings {
    /// Sets the nesting bound. Zero is raised to one so that a bare number
    /// still evaluates.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = if max_depth == 0 { 1 } else { max_depth };
        self
    }

    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets how many errors are shown. Zero is raised to one.
    #[must_use]
    pub const fn with_max_reported_errors(mut self, max_reported_errors: usize) -> Self {
        self.max_reported_errors = if max_reported_errors == 0 { 1 } else { max_reported_errors };
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
