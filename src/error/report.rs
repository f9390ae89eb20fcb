use std::fmt;

use crate::error::{CalcError, ErrorKind};

/// Every error a single expression produced, in the order they were found.
///
/// A report is never empty: evaluation only returns one when at least one
/// error was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub(crate) errors: Vec<CalcError>,
}

impl ErrorReport {
    /// Builds a report from the accumulated errors.
    ///
    /// Returns `None` when nothing went wrong.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::error::{CalcError, ErrorReport};
    ///
    /// assert!(ErrorReport::from_errors(Vec::new()).is_none());
    ///
    /// let report = ErrorReport::from_errors(vec![CalcError::NotANumber]).unwrap();
    /// assert_eq!(report.len(), 1);
    /// ```
    #[must_use]
    pub fn from_errors(errors: Vec<CalcError>) -> Option<Self> {
        if errors.is_empty() { None } else { Some(Self { errors }) }
    }

    /// Wraps a single error.
    #[must_use]
    pub fn single(error: CalcError) -> Self {
        Self { errors: vec![error] }
    }

    #[must_use]
    pub fn errors(&self) -> &[CalcError] {
        &self.errors
    }

    /// The error found first.
    #[must_use]
    pub fn first(&self) -> &CalcError {
        &self.errors[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Tests whether any error of the given kind was recorded.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::{error::ErrorKind, evaluate};
    ///
    /// let report = evaluate("1 2").unwrap_err();
    /// assert!(report.contains(ErrorKind::MissingOperator));
    /// ```
    #[must_use]
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind() == kind)
    }

    /// Kinds of all recorded errors, in order.
    pub fn kinds(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.errors.iter().map(CalcError::kind)
    }
}

impl From<CalcError> for ErrorReport {
    fn from(error: CalcError) -> Self {
        Self::single(error)
    }
}

impl IntoIterator for ErrorReport {
    type Item = CalcError;
    type IntoIter = std::vec::IntoIter<CalcError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match error.position() {
                Some(position) => write!(f, "Error at {position}: {error}")?,
                None => write!(f, "Error: {error}")?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}
