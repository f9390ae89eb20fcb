/// Character classification.
///
/// Decides which characters an expression may contain and reports every
/// character outside that set.
pub mod classifier;
/// Bracket balancing.
///
/// Checks that parentheses pair up before any token is produced, pointing at
/// the first bracket left without a partner.
pub mod balancer;
/// The lexer module tokenizes expressions for evaluation.
///
/// The lexer reads the raw text and produces numbers, identifiers, operators
/// and brackets, inserting an implicit multiplication wherever two operands
/// are merely adjacent.
///
/// # Responsibilities
/// - Converts the input into tokens carrying their source offset.
/// - Rejects malformed number literals.
/// - Makes juxtaposition explicit (`2(3)`, `2pi`, `(1)(2)`).
pub mod lexer;
/// Tokens and binding powers.
pub mod token;
/// Identifier resolution.
///
/// Maps identifiers to constants, `rand` and functions, splits concatenated
/// names, and removes implicit multiplications that only separate a function
/// from its operand.
pub mod resolver;
/// The parser module evaluates the resolved tokens.
///
/// A Pratt parser driven by binding powers. It evaluates as it parses and
/// keeps going after most errors so that one expression can report several
/// problems.
///
/// # Responsibilities
/// - Applies precedence and associativity through binding powers.
/// - Evaluates prefix and infix rules directly to `f64`.
/// - Bounds recursion depth.
pub mod parser;
/// Constants and functions.
///
/// Declares the named constants, the unary function table with its degree
/// based trigonometry, and the factorial with its Gamma extension.
pub mod function;
