/// The symbol table.
///
/// Declares the named constants and unary functions an identifier can
/// resolve to, and the lookup used by the resolver.
pub mod core;
/// Unary function implementations.
///
/// Trigonometric functions work in degrees; the remaining functions wrap
/// their `f64` counterparts.
pub mod builtin;
/// Factorial.
///
/// Exact product for non-negative integers, Spouge's approximation of the
/// gamma function for every other non-negative value.
pub mod factorial;
