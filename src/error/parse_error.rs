use thiserror::Error;

use crate::{ast::Position, util::text::join_quoted};

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token of a kind the grammar does not accept here.
    #[error("Expected {}, got '{found}' ({position})", join_quoted(.expected, "or"))]
    UnexpectedToken {
        /// Names of the accepted token kinds.
        expected: Vec<&'static str>,
        /// The token text encountered.
        found:    String,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input while a token was still required.
    #[error("Expected {}, reached end of file", join_quoted(.expected, "or"))]
    UnexpectedEndOfInput {
        /// Names of the accepted token kinds.
        expected: Vec<&'static str>,
    },
    /// A statement started with a token that cannot begin one.
    #[error("Statement must be an assignment, a conditional or an expression, got '{found}' ({position})")]
    InvalidStatement {
        /// The token text encountered.
        found:    String,
        /// Where the token starts.
        position: Position,
    },
    /// A bare comparison was assigned to a variable.
    #[error("Can't assign a comparison to '{name}' ({position})")]
    ComparisonAssignment {
        /// The variable being assigned.
        name:     String,
        /// Position of the `let` keyword.
        position: Position,
    },
    /// A keyword was used where a variable name is required.
    #[error("Identifier '{name}' is reserved ({position})")]
    IdentifierReserved {
        /// The reserved word.
        name:     String,
        /// Where it appeared.
        position: Position,
    },
}
