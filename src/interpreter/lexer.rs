use logos::Logos;
use tracing::trace;

use crate::{
    error::CalcError,
    interpreter::token::{Token, TokenKind},
};

/// Represents a raw lexeme of the input, before implicit multiplications are
/// inserted.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// A maximal run of digits and dots starting with a digit, such as `3.14`.
    /// Runs that are not a valid number (`1.2.3`, `1.`) are rejected later.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    /// A `.` with no digit before it, together with whatever digits and dots
    /// follow, such as `.5`.
    #[regex(r"\.[0-9.]*")]
    StrayDot,
    /// A maximal run of letters, such as `sqrt` or `piexp`.
    #[regex(r"[a-zA-Z]+")]
    Word,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Blanks, line ends and NUL.
    #[regex(r"[ \t\r\n\x00]+", logos::skip)]
    Ignored,
}

impl Lexeme {
    /// Token kind of a well-formed lexeme. `None` for the malformed ones.
    const fn token_kind(self) -> Option<TokenKind> {
        match self {
            Self::Number => Some(TokenKind::Number),
            Self::Word => Some(TokenKind::Identifier),
            Self::Plus => Some(TokenKind::Add),
            Self::Minus => Some(TokenKind::Subtract),
            Self::Star => Some(TokenKind::Multiply),
            Self::Slash => Some(TokenKind::Divide),
            Self::Percent => Some(TokenKind::Modulo),
            Self::Caret => Some(TokenKind::Power),
            Self::Bang => Some(TokenKind::Factorial),
            Self::LParen => Some(TokenKind::OpenParen),
            Self::RParen => Some(TokenKind::CloseParen),
            Self::StrayDot | Self::Ignored => None,
        }
    }
}

/// Tests whether `text` is a digit run with at most one `.`, followed by at
/// least one digit.
fn is_well_formed_number(text: &str) -> bool {
    match text.split_once('.') {
        None => true,
        Some((_, fraction)) => !fraction.is_empty() && !fraction.contains('.'),
    }
}

/// Tests whether an operand starting with `next` directly after `previous`
/// is a juxtaposition that means multiplication.
///
/// Two numbers in a row are left alone so that the evaluator can reject them.
fn is_juxtaposition(previous: TokenKind, next: TokenKind) -> bool {
    let starts_operand = matches!(next,
                                  TokenKind::Number | TokenKind::Identifier | TokenKind::OpenParen);
    let both_numbers = previous == TokenKind::Number && next == TokenKind::Number;
    starts_operand && previous.ends_operand() && !both_numbers
}

/// Splits `expr` into tokens.
///
/// Numbers and identifiers are consumed greedily, operators and brackets give
/// one token each, blanks give none. An implicit `*` is inserted in front of
/// a number, identifier or `(` that directly follows a number, identifier,
/// `)` or `!`, so `2(3)`, `5!(4)` and `2pi` read as products.
///
/// Offsets are byte offsets, which equal character offsets for input that
/// passed [`check_characters`](crate::interpreter::classifier::check_characters).
///
/// Malformed numbers and characters without a rule are pushed onto `errors`
/// and scanning continues.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let mut errors = Vec::new();
/// let tokens = tokenize("2(3)", &mut errors);
/// assert!(errors.is_empty());
///
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Multiply,
///             TokenKind::OpenParen,
///             TokenKind::Number,
///             TokenKind::CloseParen]);
/// assert!(tokens[1].synthetic);
/// ```
pub fn tokenize<'src>(expr: &'src str, errors: &mut Vec<CalcError>) -> Vec<Token<'src>> {
    let mut tokens: Vec<Token<'src>> = Vec::new();
    let mut lexer = Lexeme::lexer(expr);

    while let Some(lexeme) = lexer.next() {
        let text = lexer.slice();
        let offset = lexer.span().start;

        let Ok(lexeme) = lexeme else {
            let character = text.chars().next().unwrap_or_default();
            errors.push(CalcError::UnexpectedCharacter { character,
                                                         position: offset });
            continue;
        };

        let well_formed = match lexeme {
            Lexeme::Number => is_well_formed_number(text),
            Lexeme::StrayDot => false,
            _ => true,
        };
        let kind = match lexeme.token_kind() {
            Some(kind) if well_formed => kind,
            _ => {
                errors.push(CalcError::MalformedNumber { text:     text.to_string(),
                                                         position: offset, });
                continue;
            },
        };

        if let Some(previous) = tokens.last()
           && is_juxtaposition(previous.kind, kind)
        {
            tokens.push(Token::implicit_multiply(offset));
        }
        tokens.push(Token::new(text, kind, offset));
    }

    trace!(count = tokens.len(), "tokenized expression");
    tokens
}
