use tracing::trace;

use crate::{
    error::CalcError,
    interpreter::{
        function::core::{Symbol, lookup, max_name_len},
        token::{Token, TokenKind},
    },
};

const fn symbol_kind(symbol: Symbol) -> TokenKind {
    match symbol {
        Symbol::Constant(c) => TokenKind::Constant(c),
        Symbol::Random => TokenKind::Random,
        Symbol::Function(f) => TokenKind::Function(f),
    }
}

/// Splits a run of letters into known symbol names.
///
/// At each step the longest name that still lets the rest of the run be split
/// is taken. Only pieces up to the longest symbol name are tried, so the work
/// grows linearly with the run. Returns the byte ranges of the pieces, or
/// `None` when no split exists.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::resolver::segment;
///
/// assert_eq!(segment("piexp"), Some(vec![(0, 2), (2, 5)]));
/// assert_eq!(segment("sinh"), Some(vec![(0, 4)]));
/// assert_eq!(segment("foo"), None);
/// ```
#[must_use]
pub fn segment(word: &str) -> Option<Vec<(usize, usize)>> {
    let len = word.len();
    let longest = max_name_len();

    // next_cut[i] is the end of the piece starting at i, when the suffix from
    // i can be split completely.
    let mut next_cut: Vec<Option<usize>> = vec![None; len + 1];
    next_cut[len] = Some(len);

    for start in (0..len).rev() {
        let last_end = (start + longest).min(len);
        next_cut[start] = ((start + 1)..=last_end).rev().find(|&end| {
                                                        next_cut[end].is_some()
                                                        && word.get(start..end)
                                                               .and_then(lookup)
                                                               .is_some()
                                                    });
    }

    next_cut[0]?;

    let mut pieces = Vec::new();
    let mut start = 0;
    while start < len {
        let end = next_cut[start]?;
        pieces.push((start, end));
        start = end;
    }
    Some(pieces)
}

/// Tests whether `rest` starts with an empty call suffix `()`.
fn starts_with_empty_call(rest: &[Token<'_>]) -> bool {
    matches!(rest,
             [open, close, ..] if open.kind == TokenKind::OpenParen
                                  && close.kind == TokenKind::CloseParen)
}

/// Turns implicit multiplications that sit between a symbol and its operand
/// into [`TokenKind::NoOp`].
///
/// After a function the implicit `*` always goes, the function takes the next
/// operand. After a constant or `rand` it goes only in front of an empty `()`,
/// and the `()` goes with it.
fn omit_spurious_multiplications(tokens: &mut [Token<'_>]) {
    for i in 0..tokens.len() {
        if !tokens.get(i + 1).is_some_and(Token::is_implicit_multiply) {
            continue;
        }

        let kind = tokens[i].kind;
        match kind {
            TokenKind::Function(_) => tokens[i + 1].kind = TokenKind::NoOp,
            TokenKind::Constant(_) | TokenKind::Random
                if starts_with_empty_call(&tokens[i + 2..]) =>
            {
                for token in &mut tokens[i + 1..i + 4] {
                    token.kind = TokenKind::NoOp;
                }
            },
            _ => {},
        }
    }
}

/// Resolves identifiers into constants, `rand` and functions.
///
/// Runs of letters that are not a name on their own are split into names,
/// joined by implicit multiplications, so `piexp` reads as `pi * exp`. A run
/// that cannot be split is reported as
/// [`CalcError::UnknownIdentifier`] and kept as an identifier; every such run
/// is reported.
///
/// Finally, implicit multiplications that only separate a symbol from its
/// operand are turned into no-ops.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::{
///     function::core::Function,
///     lexer::tokenize,
///     resolver::resolve,
///     token::TokenKind,
/// };
///
/// let mut errors = Vec::new();
/// let tokens = resolve(tokenize("sqrt(9)", &mut errors), &mut errors);
/// assert!(errors.is_empty());
///
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Function(Function::Sqrt),
///             TokenKind::NoOp,
///             TokenKind::OpenParen,
///             TokenKind::Number,
///             TokenKind::CloseParen]);
/// ```
pub fn resolve<'src>(tokens: Vec<Token<'src>>, errors: &mut Vec<CalcError>) -> Vec<Token<'src>> {
    let mut resolved = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.kind != TokenKind::Identifier {
            resolved.push(token);
            continue;
        }

        let Some(pieces) = segment(token.text) else {
            errors.push(CalcError::UnknownIdentifier { name:     token.text.to_string(),
                                                       position: token.offset, });
            resolved.push(token);
            continue;
        };

        for (n, (start, end)) in pieces.into_iter().enumerate() {
            let text = &token.text[start..end];
            let Some(symbol) = lookup(text) else {
                continue;
            };
            if n > 0 {
                resolved.push(Token::implicit_multiply(token.offset + start));
            }
            resolved.push(Token::new(text, symbol_kind(symbol), token.offset + start));
        }
    }

    omit_spurious_multiplications(&mut resolved);

    trace!(tokens = ?resolved.iter().map(|t| t.kind).collect::<Vec<_>>(),
           "resolved identifiers");
    resolved
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::{
        error::ErrorKind,
        interpreter::{
            function::core::{Constant, Function},
            lexer::tokenize,
        },
    };

    fn kinds(expr: &str) -> Vec<TokenKind> {
        let mut errors = Vec::new();
        let tokens = resolve(tokenize(expr, &mut errors), &mut errors);
        assert!(errors.is_empty(), "unexpected errors for {expr:?}: {errors:?}");
        tokens.iter().map(|t| t.kind).collect()
    }

    fn errors(expr: &str) -> Vec<CalcError> {
        let mut errors = Vec::new();
        resolve(tokenize(expr, &mut errors), &mut errors);
        errors
    }

    #[test]
    fn constants_resolve() {
        assert_eq!(kinds("pi"), vec![TokenKind::Constant(Constant::Pi)]);
        assert_eq!(kinds("exp"), vec![TokenKind::Constant(Constant::E)]);
    }

    #[test]
    fn concatenated_constants_multiply() {
        assert_eq!(kinds("piexp"),
                   vec![TokenKind::Constant(Constant::Pi),
                        TokenKind::Multiply,
                        TokenKind::Constant(Constant::E),]);
    }

    #[test]
    fn longest_name_wins() {
        assert_eq!(kinds("sinh 1"),
                   vec![TokenKind::Function(Function::Sinh), TokenKind::NoOp, TokenKind::Number]);
    }

    #[test]
    fn segmentation_needs_a_full_cover() {
        assert_eq!(segment("asinhpi"), Some(vec![(0, 5), (5, 7)]));
        assert_eq!(segment("sinpi"), Some(vec![(0, 3), (3, 5)]));
        assert_eq!(segment("pix"), None);
        assert_eq!(segment(""), Some(vec![]));
    }

    #[test]
    fn function_swallows_implicit_multiply() {
        assert_eq!(kinds("2sin(30)"),
                   vec![TokenKind::Number,
                        TokenKind::Multiply,
                        TokenKind::Function(Function::Sin),
                        TokenKind::NoOp,
                        TokenKind::OpenParen,
                        TokenKind::Number,
                        TokenKind::CloseParen,]);
    }

    #[test]
    fn empty_call_suffix_is_omitted() {
        assert_eq!(kinds("rand()"),
                   vec![TokenKind::Random, TokenKind::NoOp, TokenKind::NoOp, TokenKind::NoOp]);
        assert_eq!(kinds("pi()"),
                   vec![TokenKind::Constant(Constant::Pi),
                        TokenKind::NoOp,
                        TokenKind::NoOp,
                        TokenKind::NoOp,]);
    }

    #[test]
    fn constant_call_with_argument_multiplies() {
        assert_eq!(kinds("pi(2)"),
                   vec![TokenKind::Constant(Constant::Pi),
                        TokenKind::Multiply,
                        TokenKind::OpenParen,
                        TokenKind::Number,
                        TokenKind::CloseParen,]);
    }

    #[test]
    fn explicit_multiply_is_kept() {
        assert_eq!(kinds("pi*(2)")[1], TokenKind::Multiply);
        assert_eq!(kinds("sqrt*4")[1], TokenKind::Multiply);
    }

    #[test]
    fn unknown_identifiers_are_all_reported() {
        let errors = errors("foo(1) + bar");
        assert_eq!(errors,
                   vec![CalcError::UnknownIdentifier { name:     "foo".to_string(),
                                                       position: 0, },
                        CalcError::UnknownIdentifier { name:     "bar".to_string(),
                                                       position: 9, },]);
    }

    #[test]
    fn long_letter_runs_resolve_in_linear_time() {
        let started = Instant::now();

        let run = "pi".repeat(10_000);
        let tokens = kinds(&run);
        assert_eq!(tokens.len(), 19_999);
        assert_eq!(tokens.iter()
                         .filter(|k| **k == TokenKind::Constant(Constant::Pi))
                         .count(),
                   10_000);

        let unknown = "a".repeat(20_000);
        let errors = errors(&unknown);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), ErrorKind::UnknownIdentifier);

        assert!(started.elapsed() < Duration::from_secs(2),
                "segmentation took {:?}",
                started.elapsed());
    }

    #[test]
    fn names_are_case_sensitive() {
        let kinds: Vec<ErrorKind> = errors("PI").iter().map(CalcError::kind).collect();
        assert_eq!(kinds, vec![ErrorKind::UnknownIdentifier]);
    }
}
