/// Parser state and the binding-power loop.
///
/// Holds the token cursor, the depth guard and the error list, and drives
/// `expression(min_bp)`.
pub mod core;

/// Prefix rules.
///
/// Evaluates a token found where an operand is expected: literals, symbols,
/// negation, groups and function application.
pub mod nud;

/// Infix and postfix rules.
///
/// Combines the operand already evaluated with the operator that follows it.
pub mod led;
