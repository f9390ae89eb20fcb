use crate::{
    error::CalcError,
    interpreter::{
        parser::core::Parser,
        token::{FACTORIAL_BP, SYMBOL_BP, Token, TokenKind},
    },
};

impl Parser<'_, '_, '_> {
    /// Evaluates `token` in operand position.
    ///
    /// `at` is the index of `token`; the cursor already points past it.
    ///
    /// Rules:
    /// - a number is its value, and must not be followed by another number,
    /// - `pi`, `exp` and `rand` are their value, `rand` drawing afresh,
    /// - `-` negates an operand that may contain `^` but stops before `!`,
    /// - `(` evaluates a full expression and expects `)`,
    /// - a function applies to the operand that follows, stopping before any
    ///   infix or postfix operator, so `sqrt(16)^2` squares the root.
    pub(super) fn nud(&mut self, at: usize, token: Token<'_>) -> f64 {
        match token.kind {
            TokenKind::Number => self.number(token),
            TokenKind::Constant(constant) => constant.value(),
            TokenKind::Random => self.draw_random(),
            TokenKind::Subtract => -self.bounded_expression(SYMBOL_BP, FACTORIAL_BP),
            TokenKind::OpenParen => self.group(),
            TokenKind::Function(function) => function.apply(self.expression(FACTORIAL_BP)),
            _ => {
                self.record(CalcError::UnexpectedToken { token:    token.to_string(),
                                                         position: at, });
                0.0
            },
        }
    }

    fn number(&mut self, token: Token<'_>) -> f64 {
        let value = match token.text.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                self.record(CalcError::MalformedNumber { text:     token.text.to_string(),
                                                         position: token.offset, });
                0.0
            },
        };

        if self.current().kind == TokenKind::Number {
            self.abort(CalcError::MissingOperator { position: self.index() });
        }
        value
    }

    fn group(&mut self) -> f64 {
        let value = self.expression(0);
        if self.is_aborted() {
            return value;
        }

        if self.current().kind == TokenKind::CloseParen {
            self.bump();
        } else {
            self.record(CalcError::UnclosedParenthesis { position: self.index() });
        }
        value
    }
}
