use std::fmt;

/// Location an error refers to.
///
/// Validation and tokenization work on the raw text and report character
/// offsets. The evaluator works on the resolved token sequence and reports
/// token indices; a caller wanting a caret under the source text must map the
/// index back through the token offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// 0-based character index into the raw input.
    Char(usize),
    /// 0-based index into the resolved token sequence.
    Token(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(index) => write!(f, "character {index}"),
            Self::Token(index) => write!(f, "token {index}"),
        }
    }
}

/// Field-less discriminant of [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyExpression,
    InvalidCharacter,
    MismatchedBrackets,
    MalformedNumber,
    UnexpectedCharacter,
    UnknownIdentifier,
    UnexpectedToken,
    EmptyParentheses,
    UnclosedParenthesis,
    MissingOperator,
    DomainError,
    NestingTooDeep,
    NonFinite,
    NotANumber,
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum CalcError {
    /// The input contained nothing but blanks.
    EmptyExpression,
    /// A character outside the accepted set was found.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character index in the input.
        position:  usize,
    },
    /// Brackets do not pair up.
    MismatchedBrackets {
        /// Character index of the first bracket left without a partner.
        position: usize,
    },
    /// A number with a stray or duplicate `.`.
    MalformedNumber {
        /// The text of the malformed literal.
        text:     String,
        /// Character index where the literal starts.
        position: usize,
    },
    /// The lexer met a character it has no rule for.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Character index in the input.
        position:  usize,
    },
    /// A run of letters that names no constant or function.
    UnknownIdentifier {
        /// The identifier as written.
        name:     String,
        /// Character index where the identifier starts.
        position: usize,
    },
    /// A token appeared where it cannot be evaluated.
    UnexpectedToken {
        /// Text of the token.
        token:    String,
        /// Index of the token.
        position: usize,
    },
    /// A group with nothing to evaluate inside it.
    EmptyParentheses {
        /// Index of the closing parenthesis.
        position: usize,
    },
    /// A group that is never closed.
    UnclosedParenthesis {
        /// Index of the token found instead of `)`.
        position: usize,
    },
    /// Two numbers with no operator between them.
    MissingOperator {
        /// Index of the second number.
        position: usize,
    },
    /// An argument outside the domain of an operation.
    DomainError {
        /// What went wrong.
        details:  String,
        /// Index of the operator token.
        position: usize,
    },
    /// Nesting exceeded the configured depth.
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Index of the token where the limit was hit.
        position: usize,
    },
    /// The result overflowed to infinity.
    NonFinite {
        /// The infinite value, keeps the sign.
        value: f64,
    },
    /// The result is not a number.
    NotANumber,
}

impl CalcError {
    /// Returns the kind of this error.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::error::{CalcError, ErrorKind};
    ///
    /// let err = CalcError::MissingOperator { position: 1 };
    /// assert_eq!(err.kind(), ErrorKind::MissingOperator);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyExpression => ErrorKind::EmptyExpression,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::MismatchedBrackets { .. } => ErrorKind::MismatchedBrackets,
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Self::UnexpectedCharacter { .. } => ErrorKind::UnexpectedCharacter,
            Self::UnknownIdentifier { .. } => ErrorKind::UnknownIdentifier,
            Self::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            Self::EmptyParentheses { .. } => ErrorKind::EmptyParentheses,
            Self::UnclosedParenthesis { .. } => ErrorKind::UnclosedParenthesis,
            Self::MissingOperator { .. } => ErrorKind::MissingOperator,
            Self::DomainError { .. } => ErrorKind::DomainError,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            Self::NonFinite { .. } => ErrorKind::NonFinite,
            Self::NotANumber => ErrorKind::NotANumber,
        }
    }

    /// Returns where the error happened, if it refers to a single spot.
    ///
    /// Errors found before tokenization point at characters, errors found by
    /// the evaluator point at tokens. Result-level errors have no position.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::error::{CalcError, Position};
    ///
    /// let err = CalcError::InvalidCharacter { character: '$',
    ///                                         position:  3, };
    /// assert_eq!(err.position(), Some(Position::Char(3)));
    /// assert_eq!(CalcError::NotANumber.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::MismatchedBrackets { position }
            | Self::MalformedNumber { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::UnknownIdentifier { position, .. } => Some(Position::Char(*position)),

            Self::UnexpectedToken { position, .. }
            | Self::EmptyParentheses { position }
            | Self::UnclosedParenthesis { position }
            | Self::MissingOperator { position }
            | Self::DomainError { position, .. }
            | Self::NestingTooDeep { position, .. } => Some(Position::Token(*position)),

            Self::EmptyExpression | Self::NonFinite { .. } | Self::NotANumber => None,
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Nothing to evaluate."),

            Self::InvalidCharacter { character, .. } => write!(f,
                                                               "Invalid character: '{}' (character code: {}).",
                                                               character.escape_default(),
                                                               u32::from(*character)),

            Self::MismatchedBrackets { .. } => write!(f, "Unmatched brackets."),

            Self::MalformedNumber { text, .. } => write!(f,
                                                         "Malformed number '{text}': numbers need digits before a '.' and may contain only one '.' (e.g. 0.1, not .1 or 1.1.1)."),

            Self::UnexpectedCharacter { character, .. } => {
                write!(f, "Unknown character: '{}'.", character.escape_default())
            },

            Self::UnknownIdentifier { name, .. } => write!(f, "Unknown identifier '{name}'."),

            Self::UnexpectedToken { token, .. } => write!(f, "Unexpected token '{token}'."),

            Self::EmptyParentheses { .. } => {
                write!(f, "Unnecessary brackets: there isn't anything in the brackets.")
            },

            Self::UnclosedParenthesis { .. } => write!(f, "Expected ending bracket ')'."),

            Self::MissingOperator { .. } => {
                write!(f, "Missing operator between two numbers.")
            },

            Self::DomainError { details, .. } => write!(f, "Domain error: {details}."),

            Self::NestingTooDeep { limit, .. } => {
                write!(f, "Expression is nested too deeply (limit is {limit}).")
            },

            Self::NonFinite { value } => {
                let sign = if value.is_sign_negative() { "-" } else { "+" };
                write!(f, "Result reached {sign}infinity.")
            },

            Self::NotANumber => write!(f, "Result is not a number."),
        }
    }
}

impl std::error::Error for CalcError {}
