/// Lexical errors.
///
/// Raised while splitting source text into tokens: characters that start no
/// token and integer literals that do not fit the integer type.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Parsing stops at the first error; no partial tree is produced.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating or rendering
/// a program, such as unresolved identifiers or division by zero.
pub mod runtime_error;

pub use lex_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete lex, parse and evaluate or render run.
///
/// The phase errors convert into this with `?`; their messages are passed
/// through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tokenization failed.
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation or rendering failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
