use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// A character that does not start any token.
    #[error("'{character}' not accepted ({position})")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it appeared.
        position:  Position,
    },
    /// An integer literal that does not fit a signed 64-bit integer.
    #[error("Integer literal {literal} is too large ({position})")]
    LiteralTooLarge {
        /// The digits as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexicalError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}
