/// Entry points: whole programs and full expressions.
pub mod core;

/// Arithmetic and comparison operators.
///
/// Parses the left-associative `*`/`/` and `+`/`-` levels and the single
/// optional comparison on top of them.
pub mod binary;

/// Braced statement blocks.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the first token of a statement: expression statements,
/// `let` assignments with their optional ternary suffix, `repeat` loops and
/// `if` chains.
pub mod statement;

/// Factors: literals, names, parenthesized expressions and unary signs.
pub mod unary;

/// Shared helpers for consuming expected tokens.
pub mod utils;
