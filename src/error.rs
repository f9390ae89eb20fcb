/// Individual evaluation errors.
///
/// Defines every error that can be raised while validating, tokenizing,
/// resolving or evaluating an expression, together with the position it refers
/// to and a field-less kind used for matching.
pub mod calc_error;
/// Error reports.
///
/// A report is the ordered list of every error a single expression produced.
/// Evaluation keeps going after most errors, so one submission can surface
/// several independent problems at once.
pub mod report;

pub use calc_error::{CalcError, ErrorKind, Position};
pub use report::ErrorReport;
