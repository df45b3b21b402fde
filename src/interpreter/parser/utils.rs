use std::{iter::Peekable, mem::discriminant};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds the error for `token` appearing where one of `expected` was
/// required.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 expected: &[&'static str])
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_vec(),
                                  found:    token.kind.to_string(),
                                  position: token.position, }
}

/// Consumes the next token, which must have one of the `accepted` kinds.
///
/// Kinds are compared without their payload, so `TokenKind::Integer(0)`
/// accepts every integer literal.
///
/// # Errors
/// - `UnexpectedToken` naming every accepted kind if the token does not
///   match.
/// - `UnexpectedEndOfInput` if there are no tokens left.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    accepted: &[TokenKind])
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let names: Vec<&'static str> = accepted.iter().map(TokenKind::name).collect();

    match tokens.next() {
        Some(token)
            if accepted.iter()
                       .any(|kind| discriminant(kind) == discriminant(&token.kind)) =>
        {
            Ok(token)
        },
        Some(token) => Err(unexpected(token, &names)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: names }),
    }
}

/// Consumes a variable name.
///
/// Keywords are rejected as reserved rather than as merely unexpected, so
/// `let and = 1;` reports that `and` cannot be used as a name.
pub(in crate::interpreter::parser) fn expect_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                               -> ParseResult<(String,
                                                                               &'a Token)>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) => match &token.kind {
            TokenKind::Identifier(name) => Ok((name.clone(), token)),
            kind if kind.is_keyword() => {
                Err(ParseError::IdentifierReserved { name:     kind.to_string(),
                                                     position: token.position, })
            },
            _ => Err(unexpected(token, &["identifier"])),
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: vec!["identifier"] }),
    }
}

/// Whether the next token has the same kind as `kind`, ignoring payloads.
pub(in crate::interpreter::parser) fn peek_is<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: &TokenKind)
                                                     -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .is_some_and(|token| discriminant(&token.kind) == discriminant(kind))
}
