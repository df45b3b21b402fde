use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program into its [`Node::Module`] root.
///
/// Statements are parsed until the tokens run out. The first error stops
/// parsing; no partial tree is returned.
///
/// Grammar: `program := statement*`
///
/// # Example
/// ```
/// use brisk::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("let x = 1; x;").unwrap();
/// let Node::Module { statements } = parse_program(&tokens).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(statements.len(), 2);
/// assert!(statements[1].is_standalone());
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Node> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    debug!(statements = statements.len(), "parsed module");
    Ok(Node::Module { statements })
}

/// Parses a full arithmetic expression.
///
/// Comparisons are not part of an expression; they are only accepted where
/// [`parse_comparison`](crate::interpreter::parser::binary::parse_comparison)
/// is called explicitly.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}
