use crate::error::CalcError;

/// Category of an accepted character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Letter,
    Operator,
    Bracket,
    Dot,
    Whitespace,
    /// Line end or NUL terminator.
    LineEnd,
}

/// Classifies a character, or returns `None` if it is not accepted.
///
/// Accepted are ASCII digits and letters, `+ - * / % ^ !`, brackets, `.`,
/// space, tab, line ends and NUL.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::classifier::{CharClass, classify};
///
/// assert_eq!(classify('7'), Some(CharClass::Digit));
/// assert_eq!(classify('%'), Some(CharClass::Operator));
/// assert_eq!(classify('\t'), Some(CharClass::Whitespace));
/// assert_eq!(classify('$'), None);
/// assert_eq!(classify('π'), None);
/// ```
#[must_use]
pub const fn classify(c: char) -> Option<CharClass> {
    match c {
        '0'..='9' => Some(CharClass::Digit),
        'a'..='z' | 'A'..='Z' => Some(CharClass::Letter),
        '+' | '-' | '*' | '/' | '%' | '^' | '!' => Some(CharClass::Operator),
        '(' | ')' => Some(CharClass::Bracket),
        '.' => Some(CharClass::Dot),
        ' ' | '\t' => Some(CharClass::Whitespace),
        '\n' | '\r' | '\0' => Some(CharClass::LineEnd),
        _ => None,
    }
}

#[must_use]
pub const fn is_valid(c: char) -> bool {
    classify(c).is_some()
}

/// Reports every character of `expr` that is not accepted.
///
/// Scanning does not stop at the first failure, so all invalid characters of
/// one input are reported together, in order.
///
/// # Example
/// ```
/// use pratt_calc::{error::CalcError, interpreter::classifier::check_characters};
///
/// assert!(check_characters("2 * (3 + 4)").is_empty());
///
/// let errors = check_characters("1 $ 2 # 3");
/// assert_eq!(errors,
///            vec![CalcError::InvalidCharacter { character: '$',
///                                               position:  2, },
///                 CalcError::InvalidCharacter { character: '#',
///                                               position:  6, },]);
/// ```
#[must_use]
pub fn check_characters(expr: &str) -> Vec<CalcError> {
    expr.chars()
        .enumerate()
        .filter(|(_, c)| !is_valid(*c))
        .map(|(position, character)| CalcError::InvalidCharacter { character, position })
        .collect()
}
