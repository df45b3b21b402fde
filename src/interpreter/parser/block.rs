use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, peek_is},
        },
    },
};

/// Parses a block of statements delimited by braces.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements inside the braces, in source order.
///
/// # Errors
/// - `UnexpectedToken` if the block does not start with `{`.
/// - `UnexpectedEndOfInput` if the input ends before the closing `}`.
/// - Any error from the statements inside.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, &[TokenKind::LBrace])?;

    let mut statements = Vec::new();

    loop {
        if tokens.peek().is_none() {
            return Err(ParseError::UnexpectedEndOfInput { expected: vec![TokenKind::RBrace.name()] });
        }
        if peek_is(tokens, &TokenKind::RBrace) {
            tokens.next();
            break;
        }

        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
