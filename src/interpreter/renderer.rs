/// The `Renderer`, render options and the program frame.
pub mod core;

/// Expression text, standalone `printf` statements and assignments.
pub mod expression;

/// `if` chains and `repeat` loops.
pub mod control;

/// Collision-free loop counter names.
pub mod counter;
