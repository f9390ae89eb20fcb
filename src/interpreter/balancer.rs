use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    Open,
    Close,
}

/// Checks that the brackets of `expr` pair up.
///
/// Works on a scratch copy that keeps only the brackets: every `(` followed,
/// after nothing but blanks, by a `)` is an innermost pair and both are
/// blanked. This repeats until no pair is left. Any bracket still standing is
/// unmatched, whatever its distance from the others.
///
/// # Errors
/// Returns `MismatchedBrackets` pointing at the first bracket left over.
///
/// # Example
/// ```
/// use pratt_calc::{error::CalcError, interpreter::balancer::check_balance};
///
/// assert!(check_balance("(1 + (2 * 3)) - (4)").is_ok());
/// assert!(check_balance("no brackets at all").is_ok());
///
/// assert_eq!(check_balance("(()"),
///            Err(CalcError::MismatchedBrackets { position: 0 }));
/// assert_eq!(check_balance("())"),
///            Err(CalcError::MismatchedBrackets { position: 2 }));
/// assert_eq!(check_balance(")("),
///            Err(CalcError::MismatchedBrackets { position: 0 }));
/// ```
pub fn check_balance(expr: &str) -> Result<(), CalcError> {
    let mut scratch: Vec<Option<Bracket>> = expr.chars()
                                                .map(|c| match c {
                                                    '(' => Some(Bracket::Open),
                                                    ')' => Some(Bracket::Close),
                                                    _ => None,
                                                })
                                                .collect();

    while cancel_innermost_pairs(&mut scratch) {}

    match scratch.iter().position(Option::is_some) {
        Some(position) => Err(CalcError::MismatchedBrackets { position }),
        None => Ok(()),
    }
}

/// Blanks every adjacent `(` `)` pair in one sweep. Returns `true` if any
/// pair was removed.
fn cancel_innermost_pairs(scratch: &mut [Option<Bracket>]) -> bool {
    let mut cancelled = false;
    let mut open = None;

    for i in 0..scratch.len() {
        match scratch[i] {
            Some(Bracket::Open) => open = Some(i),
            Some(Bracket::Close) => {
                if let Some(o) = open.take() {
                    scratch[o] = None;
                    scratch[i] = None;
                    cancelled = true;
                }
            },
            None => {},
        }
    }

    cancelled
}
