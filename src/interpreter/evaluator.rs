/// Core evaluation logic.
///
/// Contains the `Evaluator`, node dispatch, standalone output and the result
/// type shared with rendering.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+ - * /` with integer overflow checks and real-valued
/// division, and the `<`/`>` comparisons.
pub mod binary;

/// Evaluation of `if`/`elif`/`else` chains.
pub mod conditional;

/// Evaluation of repeat loops: the bound is fixed before the first
/// iteration.
pub mod repeat;
