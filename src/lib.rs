//! # pratt-calc
//!
//! pratt-calc is an arithmetic expression evaluator written in Rust.
//! It validates, tokenizes and evaluates one-line expressions with a Pratt
//! parser, supporting implicit multiplication, postfix factorial, constants,
//! random numbers and a table of unary functions working in degrees.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use crate::{
    config::Settings,
    error::{CalcError, ErrorReport},
    interpreter::{
        balancer::check_balance,
        classifier::{CharClass, check_characters, classify},
        lexer::tokenize,
        parser::core::Parser,
        resolver::resolve,
    },
    util::format::format_result,
};

/// Evaluator settings.
///
/// Declares [`Settings`](config::Settings), the recursion bound, output
/// precision, error display cap and random seed shared by the library and the
/// command line.
pub mod config;
/// Provides unified error types for every stage of evaluation.
///
/// This module defines all errors that can be raised while validating,
/// tokenizing, resolving or evaluating an expression. Every error carries the
/// position it refers to, either a character of the input or a token of the
/// resolved sequence.
///
/// # Responsibilities
/// - Defines one error variant per failure mode, with a field-less kind.
/// - Collects the errors of one expression into an ordered report.
pub mod error;
/// Expression pipeline.
///
/// Contains the stages an expression passes through: character
/// classification, bracket balancing, tokenization, identifier resolution and
/// the evaluating Pratt parser, together with the table of constants and
/// functions.
pub mod interpreter;
/// Line-oriented sessions.
///
/// Reads expressions and commands from any reader, writes results and
/// rendered error reports to any writer. The binary drives it with standard
/// input and output.
pub mod session;
/// Utility helpers used across the crate.
///
/// Contains numeric conversion helpers and result formatting.
pub mod util;

/// Evaluates expressions with a fixed set of [`Settings`].
///
/// A calculator owns the random number generator used by `rand`, so a seeded
/// calculator produces the same sequence of draws across runs. Nothing else
/// carries over from one expression to the next.
///
/// # Example
/// ```
/// use pratt_calc::{Calculator, config::Settings};
///
/// let mut calc = Calculator::with_settings(Settings::default().with_seed(Some(1)));
/// assert_eq!(calc.evaluate("2(3)").unwrap(), 6.0);
/// assert_eq!(calc.evaluate("5!").unwrap(), 120.0);
/// assert!(calc.evaluate("1/0").is_err());
/// ```
#[derive(Debug)]
pub struct Calculator {
    settings: Settings,
    rng:      StdRng,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A calculator with default settings and an OS-seeded `rand`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { settings, rng }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Formats a result with the configured precision.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format_result(value, self.settings.precision)
    }

    /// Evaluates one expression.
    ///
    /// The stages run in order: character check, bracket balance,
    /// tokenization with implicit multiplication, identifier resolution and
    /// evaluation. Invalid characters stop the pipeline before tokenization,
    /// and tokenizer or resolver errors stop it before evaluation. A bracket
    /// mismatch is reported but evaluation still runs, so the report also
    /// shows where the parser got stuck.
    ///
    /// A result that is NaN or infinite is an error of its own, reported only
    /// when nothing else went wrong.
    ///
    /// # Errors
    /// Returns an [`ErrorReport`] holding every error found, in order.
    pub fn evaluate(&mut self, expr: &str) -> Result<f64, ErrorReport> {
        if is_blank(expr) {
            return Err(ErrorReport::single(CalcError::EmptyExpression));
        }

        let mut errors = check_characters(expr);
        debug!(invalid = errors.len(), "classified characters");
        if !errors.is_empty() {
            return Err(ErrorReport { errors });
        }

        if let Err(mismatch) = check_balance(expr) {
            debug!(%mismatch, "brackets do not balance");
            errors.push(mismatch);
        }
        let reported_before_scan = errors.len();

        let tokens = tokenize(expr, &mut errors);
        debug!(count = tokens.len(), "tokenized");
        let tokens = resolve(tokens, &mut errors);
        if errors.len() > reported_before_scan {
            debug!(errors = errors.len(), "stopping before evaluation");
            return Err(ErrorReport { errors });
        }

        let parser = Parser::new(&tokens, self.settings.max_depth, &mut self.rng);
        let (value, parse_errors) = parser.parse();
        errors.extend(parse_errors);

        if errors.is_empty() {
            if value.is_nan() {
                errors.push(CalcError::NotANumber);
            } else if value.is_infinite() {
                errors.push(CalcError::NonFinite { value });
            }
        }

        match ErrorReport::from_errors(errors) {
            Some(report) => {
                debug!(errors = report.len(), "evaluation failed");
                Err(report)
            },
            None => {
                trace!(value, "evaluated");
                Ok(value)
            },
        }
    }
}

/// Tests whether `expr` holds nothing but blanks and line ends.
fn is_blank(expr: &str) -> bool {
    expr.chars()
        .all(|c| matches!(classify(c), Some(CharClass::Whitespace | CharClass::LineEnd)))
}

/// Evaluates one expression with default settings.
///
/// This is the main entry point of the library. `rand` draws from an OS-seeded
/// generator; use a [`Calculator`] with a seed for reproducible draws.
///
/// # Errors
/// Returns an [`ErrorReport`] holding every error found, in order.
///
/// # Example
/// ```
/// use pratt_calc::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
///
/// let report = evaluate("foo(1)").unwrap_err();
/// assert!(report.contains(ErrorKind::UnknownIdentifier));
/// ```
pub fn evaluate(expr: &str) -> Result<f64, ErrorReport> {
    Calculator::new().evaluate(expr)
}
