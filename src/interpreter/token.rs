use std::fmt;

use crate::interpreter::function::core::{Constant, Function};

/// Binding power of `+` and binary `-`.
pub const ADDITIVE_BP: u8 = 10;
/// Binding power of `*`, `/` and `%`.
pub const MULTIPLICATIVE_BP: u8 = 20;
/// Binding power of zero-argument symbols, and the floor used for the operand
/// of unary negation.
pub const SYMBOL_BP: u8 = 25;
/// Binding power of `^`.
pub const POWER_BP: u8 = 30;
/// Binding power of postfix `!`, and the floor used for function operands.
pub const FACTORIAL_BP: u8 = 40;

/// Kind of a token.
///
/// Identifiers start out as [`TokenKind::Identifier`] and are replaced by
/// [`TokenKind::Constant`], [`TokenKind::Random`] or [`TokenKind::Function`]
/// during resolution. [`TokenKind::NoOp`] marks an implicit multiplication
/// that turned out to be spurious.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Identifier,
    Constant(Constant),
    Random,
    Function(Function),
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Factorial,
    OpenParen,
    CloseParen,
    NoOp,
    EndOfInput,
}

impl TokenKind {
    /// Returns the binding power of this kind.
    ///
    /// Higher binds tighter. The value depends on the kind only, never on the
    /// individual token.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::Add.binding_power(), 10);
    /// assert_eq!(TokenKind::Power.binding_power(), 30);
    /// assert_eq!(TokenKind::EndOfInput.binding_power(), 0);
    /// ```
    #[must_use]
    pub const fn binding_power(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => ADDITIVE_BP,
            Self::Multiply | Self::Divide | Self::Modulo => MULTIPLICATIVE_BP,
            Self::Constant(_) | Self::Random => SYMBOL_BP,
            Self::Power => POWER_BP,
            Self::Factorial => FACTORIAL_BP,
            _ => 0,
        }
    }

    /// Tests whether a token of this kind can end an operand, so that an
    /// operand directly after it is a juxtaposition.
    #[must_use]
    pub const fn ends_operand(self) -> bool {
        matches!(self, Self::Number | Self::CloseParen | Self::Factorial | Self::Identifier)
    }
}

/// A token: a slice of the input with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// Source text of the token. Synthetic tokens carry the operator text.
    pub text:      &'src str,
    pub kind:      TokenKind,
    /// Character offset of the token in the input.
    pub offset:    usize,
    /// Set for implicit multiplications inserted by the tokenizer.
    pub synthetic: bool,
}

impl<'src> Token<'src> {
    #[must_use]
    pub const fn new(text: &'src str, kind: TokenKind, offset: usize) -> Self {
        Self { text,
               kind,
               offset,
               synthetic: false }
    }

    /// An implicit `*` placed in front of the token starting at `offset`.
    #[must_use]
    pub const fn implicit_multiply(offset: usize) -> Self {
        Self { text: "*",
               kind: TokenKind::Multiply,
               offset,
               synthetic: true }
    }

    /// The sentinel returned once the cursor runs past the last token.
    #[must_use]
    pub const fn end_of_input(offset: usize) -> Self {
        Self::new("", TokenKind::EndOfInput, offset)
    }

    #[must_use]
    pub const fn binding_power(&self) -> u8 {
        self.kind.binding_power()
    }

    /// Tests whether this is an implicit multiplication.
    #[must_use]
    pub fn is_implicit_multiply(&self) -> bool {
        self.synthetic && self.kind == TokenKind::Multiply
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Constant(c) => write!(f, "{}", c.name()),
            TokenKind::Function(func) => write!(f, "{}", func.name()),
            _ => write!(f, "{}", self.text),
        }
    }
}
