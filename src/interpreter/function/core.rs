use crate::interpreter::function::builtin;

/// A named constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// Name of the constant as it is written in expressions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "exp",
        }
    }
}

/// Defines the unary functions by generating the `Function` enum, its
/// name lookup and its dispatch.
///
/// Each entry provides:
/// - the enum variant,
/// - the name used in expressions,
/// - the implementation, any `fn(f64) -> f64`.
macro_rules! unary_functions {
    (
        $(
            $variant:ident => $name:literal, $func:expr
        );* $(;)?
    ) => {
        /// A unary function applied as a prefix operator.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Function {
            $($variant,)*
        }

        impl Function {
            /// Every function, in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Name of the function as it is written in expressions.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Applies the function to its operand.
            ///
            /// # Example
            /// ```
            /// use pratt_calc::interpreter::function::core::Function;
            ///
            /// assert_eq!(Function::Sqrt.apply(9.0), 3.0);
            /// assert_eq!(Function::Sin.apply(90.0), 1.0);
            /// ```
            #[must_use]
            pub fn apply(self, x: f64) -> f64 {
                match self {
                    $(Self::$variant => ($func)(x),)*
                }
            }
        }
    };
}

unary_functions! {
    Sqrt     => "sqrt",     f64::sqrt;
    Cbrt     => "cbrt",     f64::cbrt;
    Log      => "log",      f64::log10;
    Ln       => "ln",       f64::ln;
    Sin      => "sin",      builtin::sin;
    Cos      => "cos",      builtin::cos;
    Tan      => "tan",      builtin::tan;
    Asin     => "asin",     builtin::asin;
    Acos     => "acos",     builtin::acos;
    Atan     => "atan",     builtin::atan;
    Sinh     => "sinh",     f64::sinh;
    Cosh     => "cosh",     f64::cosh;
    Tanh     => "tanh",     f64::tanh;
    Asinh    => "asinh",    f64::asinh;
    Acosh    => "acosh",    f64::acosh;
    Atanh    => "atanh",    f64::atanh;
    Abs      => "abs",      f64::abs;
    Floor    => "floor",    f64::floor;
    Ceil     => "ceil",     f64::ceil;
    Round    => "round",    f64::round;
    DegToRad => "degtorad", f64::to_radians;
    RadToDeg => "radtodeg", f64::to_degrees;
}

/// What an identifier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A fixed value such as `pi`.
    Constant(Constant),
    /// `rand`, a fresh uniform draw from `[0, 1)` each time it is evaluated.
    Random,
    /// A prefix function taking one operand.
    Function(Function),
}

impl Symbol {
    /// Name of the symbol as it is written in expressions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Constant(c) => c.name(),
            Self::Random => RANDOM_NAME,
            Self::Function(f) => f.name(),
        }
    }
}

const RANDOM_NAME: &str = "rand";

const CONSTANTS: &[Constant] = &[Constant::Pi, Constant::E];

/// Looks up an identifier. Names are case-sensitive.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::function::core::{Constant, Function, Symbol, lookup};
///
/// assert_eq!(lookup("pi"), Some(Symbol::Constant(Constant::Pi)));
/// assert_eq!(lookup("sqrt"), Some(Symbol::Function(Function::Sqrt)));
/// assert_eq!(lookup("rand"), Some(Symbol::Random));
/// assert_eq!(lookup("PI"), None);
/// assert_eq!(lookup("foo"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Symbol> {
    symbols().find(|s| s.name() == name)
}

/// Every symbol, constants first.
pub fn symbols() -> impl Iterator<Item = Symbol> {
    CONSTANTS.iter()
             .map(|c| Symbol::Constant(*c))
             .chain(std::iter::once(Symbol::Random))
             .chain(Function::ALL.iter().map(|f| Symbol::Function(*f)))
}

/// Names of every symbol, constants first.
pub fn symbol_names() -> impl Iterator<Item = &'static str> {
    symbols().map(Symbol::name)
}

/// Length of the longest symbol name.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::function::core::max_name_len;
///
/// assert_eq!(max_name_len(), "degtorad".len());
/// ```
#[must_use]
pub fn max_name_len() -> usize {
    symbol_names().map(str::len).max().unwrap_or(0)
}
