use std::io;

use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during evaluation and rendering.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A reference to a name that was never assigned.
    #[error("Variable '{name}' not found ({position})")]
    UnresolvedIdentifier {
        /// The name of the variable.
        name:     String,
        /// Where the reference appears.
        position: Position,
    },
    /// Attempted division by zero.
    #[error("Division by zero ({position})")]
    DivisionByZero {
        /// Position of the `/` operator.
        position: Position,
    },
    /// Integer arithmetic overflowed.
    #[error("Integer overflow while trying to compute result ({position})")]
    Overflow {
        /// Position of the operator.
        position: Position,
    },
    /// A `repeat` bound that is not a whole number.
    #[error("Invalid repeat bound {bound}: expected a whole number ({position})")]
    InvalidRepeatBound {
        /// The evaluated bound, as it would print.
        bound:    String,
        /// Position of the `repeat` keyword.
        position: Position,
    },
    /// A statement was used where a value is required.
    #[error("Expected a value ({position})")]
    MissingValue {
        /// Where the statement starts.
        position: Position,
    },
    /// Writing the output of a standalone expression failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
