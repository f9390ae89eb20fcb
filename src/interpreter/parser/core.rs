use rand::{Rng, rngs::StdRng};
use tracing::trace;

use crate::{
    error::CalcError,
    interpreter::token::{Token, TokenKind},
};

/// A Pratt parser that evaluates while it parses.
///
/// There is no tree: every rule returns the value of the subexpression it
/// consumed. Errors are collected rather than returned, and rules hand back
/// `0.0` as a placeholder so that parsing can go on and find more problems.
/// Fatal errors set a flag that unwinds the remaining rules without looking
/// at further tokens.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::{
///     lexer::tokenize,
///     parser::core::Parser,
///     resolver::resolve,
/// };
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut errors = Vec::new();
/// let tokens = resolve(tokenize("2 + 3 * 4", &mut errors), &mut errors);
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let (value, errors) = Parser::new(&tokens, 256, &mut rng).parse();
/// assert!(errors.is_empty());
/// assert_eq!(value, 14.0);
/// ```
pub struct Parser<'t, 'src, 'r> {
    tokens:    &'t [Token<'src>],
    /// Index of `current` in `tokens`, or `tokens.len()` past the end.
    index:     usize,
    current:   Token<'src>,
    depth:     usize,
    max_depth: usize,
    rng:       &'r mut StdRng,
    errors:    Vec<CalcError>,
    aborted:   bool,
}

impl<'t, 'src, 'r> Parser<'t, 'src, 'r> {
    #[must_use]
    pub fn new(tokens: &'t [Token<'src>], max_depth: usize, rng: &'r mut StdRng) -> Self {
        let mut parser = Self { tokens,
                                index: 0,
                                current: Token::end_of_input(0),
                                depth: 0,
                                max_depth,
                                rng,
                                errors: Vec::new(),
                                aborted: false };
        parser.seek(0);
        parser
    }

    /// Evaluates the whole token sequence.
    ///
    /// Returns the value together with every error found. The value is only
    /// meaningful when the error list is empty.
    #[must_use]
    pub fn parse(mut self) -> (f64, Vec<CalcError>) {
        let value = self.expression(0);

        if !self.aborted && self.current.kind != TokenKind::EndOfInput {
            let token = self.current.to_string();
            self.record(CalcError::UnexpectedToken { token,
                                                     position: self.index });
        }

        trace!(value, errors = self.errors.len(), "parsed expression");
        (value, self.errors)
    }

    /// Places the cursor on the first token at or after `from` that is not a
    /// no-op.
    fn seek(&mut self, from: usize) {
        let mut index = from;
        while self.tokens
                  .get(index)
                  .is_some_and(|t| t.kind == TokenKind::NoOp)
        {
            index += 1;
        }

        self.index = index;
        self.current = match self.tokens.get(index) {
            Some(token) => *token,
            None => {
                let end = self.tokens.last().map_or(0, |t| t.offset + t.text.len());
                Token::end_of_input(end)
            },
        };
    }

    /// Returns the current token with its index and moves past it.
    pub(super) fn bump(&mut self) -> (usize, Token<'src>) {
        let consumed = (self.index, self.current);
        if self.index < self.tokens.len() {
            self.seek(self.index + 1);
        }
        consumed
    }

    pub(super) const fn current(&self) -> Token<'src> {
        self.current
    }

    pub(super) const fn index(&self) -> usize {
        self.index
    }

    /// Draws a fresh uniform sample from `[0, 1)`.
    pub(super) fn draw_random(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    pub(super) fn record(&mut self, error: CalcError) {
        self.errors.push(error);
    }

    /// Records an error after which nothing else is parsed.
    pub(super) fn abort(&mut self, error: CalcError) {
        self.errors.push(error);
        self.aborted = true;
    }

    pub(super) const fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Parses and evaluates an expression whose operators all bind tighter
    /// than `min_bp`.
    ///
    /// Left associativity comes from the caller passing the operator's own
    /// power, right associativity from passing one less.
    pub fn expression(&mut self, min_bp: u8) -> f64 {
        self.bounded_expression(min_bp, u8::MAX)
    }

    /// Like [`Parser::expression`], but also stops at operators binding at
    /// `max_bp` or tighter.
    pub(super) fn bounded_expression(&mut self, min_bp: u8, max_bp: u8) -> f64 {
        if self.aborted {
            return 0.0;
        }
        if self.depth >= self.max_depth {
            self.abort(CalcError::NestingTooDeep { limit:    self.max_depth,
                                                   position: self.index, });
            return 0.0;
        }

        self.depth += 1;
        let value = self.binding_power_loop(min_bp, max_bp);
        self.depth -= 1;
        value
    }

    fn binding_power_loop(&mut self, min_bp: u8, max_bp: u8) -> f64 {
        if self.current.kind == TokenKind::CloseParen {
            self.record(CalcError::EmptyParentheses { position: self.index });
            return 0.0;
        }

        let (at, token) = self.bump();
        let mut left = self.nud(at, token);

        loop {
            let bp = self.current.binding_power();
            if self.aborted || bp <= min_bp || bp >= max_bp {
                break;
            }
            let (at, token) = self.bump();
            left = self.led(at, token, left);
        }

        left
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::{
        error::ErrorKind,
        interpreter::{lexer::tokenize, resolver::resolve},
    };

    fn run(expr: &str, max_depth: usize) -> (f64, Vec<CalcError>) {
        let mut errors = Vec::new();
        let tokens = resolve(tokenize(expr, &mut errors), &mut errors);
        assert!(errors.is_empty(), "unexpected errors for {expr:?}: {errors:?}");
        let mut rng = StdRng::seed_from_u64(42);
        Parser::new(&tokens, max_depth, &mut rng).parse()
    }

    fn value(expr: &str) -> f64 {
        let (value, errors) = run(expr, 256);
        assert!(errors.is_empty(), "unexpected errors for {expr:?}: {errors:?}");
        value
    }

    fn kinds(expr: &str) -> Vec<ErrorKind> {
        run(expr, 256).1.iter().map(CalcError::kind).collect()
    }

    #[test]
    fn precedence_climbs() {
        assert_eq!(value("2 + 3 * 4"), 14.0);
        assert_eq!(value("(2 + 3) * 4"), 20.0);
        assert_eq!(value("2 * 3 + 4"), 10.0);
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(value("10 - 4 - 3"), 3.0);
        assert_eq!(value("64 / 4 / 2"), 8.0);
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(value("2^3^2"), 512.0);
    }

    #[test]
    fn no_ops_are_skipped() {
        assert_eq!(value("rand() * 0"), 0.0);
        assert_eq!(value("sqrt(16)"), 4.0);
    }

    #[test]
    fn trailing_tokens_are_reported() {
        assert_eq!(kinds("(1))"), vec![ErrorKind::UnexpectedToken]);
    }

    #[test]
    fn empty_input_is_an_unexpected_end() {
        assert_eq!(kinds(""), vec![ErrorKind::UnexpectedToken]);
    }

    #[test]
    fn depth_guard_stops_deep_nesting() {
        let deep = format!("{}1{}", "(".repeat(40), ")".repeat(40));
        assert_eq!(value(&deep), 1.0);

        let (_, errors) = run(&deep, 16);
        assert_eq!(errors,
                   vec![CalcError::NestingTooDeep { limit:    16,
                                                    position: 16, }]);
    }

    #[test]
    fn depth_guard_counts_negations() {
        let deep = format!("{}1", "-".repeat(300));
        assert_eq!(kinds(&deep), vec![ErrorKind::NestingTooDeep]);
    }
}
