use crate::{
    error::CalcError,
    interpreter::{
        function::factorial::factorial,
        parser::core::Parser,
        token::{ADDITIVE_BP, MULTIPLICATIVE_BP, POWER_BP, Token, TokenKind},
    },
};

impl Parser<'_, '_, '_> {
    /// Combines `left` with the operator `token` found at index `at`.
    ///
    /// Binary operators evaluate their right operand at their own binding
    /// power, except `^`, which uses one less and so groups to the right.
    /// `%` is the floating-point remainder and keeps the sign of `left`.
    pub(super) fn led(&mut self, at: usize, token: Token<'_>, left: f64) -> f64 {
        match token.kind {
            TokenKind::Add => left + self.expression(ADDITIVE_BP),
            TokenKind::Subtract => left - self.expression(ADDITIVE_BP),
            TokenKind::Multiply => left * self.expression(MULTIPLICATIVE_BP),
            TokenKind::Divide => left / self.expression(MULTIPLICATIVE_BP),
            TokenKind::Modulo => left % self.expression(MULTIPLICATIVE_BP),
            TokenKind::Power => left.powf(self.expression(POWER_BP - 1)),
            TokenKind::Factorial => match factorial(left) {
                Some(value) => value,
                None => {
                    self.record(CalcError::DomainError { details:  format!("factorial of {left} is undefined"),
                                                         position: at, });
                    0.0
                },
            },
            _ => {
                self.record(CalcError::UnexpectedToken { token:    token.to_string(),
                                                         position: at, });
                left
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::{
        error::CalcError,
        interpreter::{lexer::tokenize, parser::core::Parser, resolver::resolve},
    };

    fn run(expr: &str) -> (f64, Vec<CalcError>) {
        let mut errors = Vec::new();
        let tokens = resolve(tokenize(expr, &mut errors), &mut errors);
        let mut rng = StdRng::seed_from_u64(7);
        Parser::new(&tokens, 256, &mut rng).parse()
    }

    fn value(expr: &str) -> f64 {
        let (value, errors) = run(expr);
        assert!(errors.is_empty(), "unexpected errors for {expr:?}: {errors:?}");
        value
    }

    #[test]
    fn remainder_keeps_sign_of_dividend() {
        assert_eq!(value("7 % 3"), 1.0);
        assert_eq!(value("-7 % 3"), -1.0);
        assert_eq!(value("7.5 % 2"), 1.5);
    }

    #[test]
    fn factorial_is_postfix() {
        assert_eq!(value("5!"), 120.0);
        assert_eq!(value("3!!"), 720.0);
        assert_eq!(value("2^3!"), 64.0);
        assert_eq!(value("0!"), 1.0);
    }

    #[test]
    fn factorial_of_fraction_uses_gamma() {
        let half = value("0.5!");
        assert!((half - 0.886_226_925_452_758).abs() < 1e-9);
    }

    #[test]
    fn negative_factorial_is_a_domain_error() {
        let (_, errors) = run("(0-1)!");
        assert_eq!(errors,
                   vec![CalcError::DomainError { details:  "factorial of -1 is undefined".to_string(),
                                                 position: 5, }]);
    }

    #[test]
    fn division_follows_ieee() {
        assert_eq!(value("1/0"), f64::INFINITY);
        assert!(value("0/0").is_nan());
    }
}
