use std::iter::Peekable;

use crate::{
    ast::{Conditional, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_comparison,
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, expect_identifier, peek_is},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an expression statement (`x + 1;`), when it starts with an integer, an
///   identifier or `(`; the expression is marked standalone.
/// - an assignment (`let x = ...;`).
/// - a repeat loop (`repeat n { ... }`).
/// - a conditional (`if ... { ... }`).
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed statement [`Node`].
///
/// # Errors
/// `InvalidStatement` if the first token cannot start a statement, or any
/// error from the construct being parsed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let Some(&token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: vec!["statement"] });
    };

    match token.kind {
        TokenKind::Integer(_) | TokenKind::Identifier(_) | TokenKind::LParen => {
            let mut expr = parse_expression(tokens)?;
            expr.mark_standalone();
            expect(tokens, &[TokenKind::Semicolon])?;
            Ok(expr)
        },
        TokenKind::Let => {
            let assignment = parse_assignment(tokens)?;
            expect(tokens, &[TokenKind::Semicolon])?;
            Ok(assignment)
        },
        TokenKind::Repeat => parse_repeat(tokens),
        TokenKind::If => parse_if(tokens).map(Node::Conditional),
        _ => Err(ParseError::InvalidStatement { found:    token.kind.to_string(),
                                                position: token.position, }),
    }
}

/// Parses an assignment, without its trailing semicolon.
///
/// The assigned value is a comparison-level expression, optionally followed
/// by a ternary suffix that uses it as the condition:
///
/// ```text
///     assignment := "let" identifier "=" comparison ("?" expression ":" expression)?
/// ```
///
/// So `let x = 1 < 2 ? 10 : 20;` assigns a ternary whose condition is
/// `1 < 2`.
///
/// # Errors
/// - `IdentifierReserved` if the name is a keyword such as `and`.
/// - `ComparisonAssignment` if a bare comparison is assigned.
/// - `UnexpectedToken` if `=` or a ternary part is missing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, &[TokenKind::Let])?.position;
    let (name, _) = expect_identifier(tokens)?;
    expect(tokens, &[TokenKind::Equals])?;

    let mut value = parse_comparison(tokens)?;
    if peek_is(tokens, &TokenKind::Question) {
        value = parse_ternary(tokens, value)?;
    }

    if matches!(value, Node::Comparison { .. }) {
        return Err(ParseError::ComparisonAssignment { name, position });
    }

    Ok(Node::Assignment { name,
                          value: Box::new(value),
                          position })
}

/// Parses the `? if_true : if_false` suffix of an already parsed condition.
///
/// Only the untaken branch is skipped at runtime, so both branches are full
/// expressions here.
fn parse_ternary<'a, I>(tokens: &mut Peekable<I>, condition: Node) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, &[TokenKind::Question])?.position;
    let if_true = parse_expression(tokens)?;
    expect(tokens, &[TokenKind::Colon])?;
    let if_false = parse_expression(tokens)?;

    Ok(Node::Ternary { condition: Box::new(condition),
                       if_true: Box::new(if_true),
                       if_false: Box::new(if_false),
                       position })
}

/// Parses a repeat loop.
///
/// Grammar: `repeat := "repeat" expression block`
fn parse_repeat<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, &[TokenKind::Repeat])?.position;
    let times = parse_expression(tokens)?;
    let block = parse_block(tokens)?;

    Ok(Node::Repeat { times: Box::new(times),
                      block,
                      position })
}

/// Parses an `if` statement with any number of `elif` branches and an
/// optional `else`.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     elif <condition> { ... }
///     else { ... }
/// ```
/// Each `elif` becomes a [`Conditional`] of its own, with no branches of its
/// own, appended to the leading conditional's `elifs`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Conditional>
    where I: Iterator<Item = &'a Token>
{
    let mut conditional = parse_branch(tokens, &TokenKind::If)?;

    while peek_is(tokens, &TokenKind::Elif) {
        conditional.elifs.push(parse_branch(tokens, &TokenKind::Elif)?);
    }

    if peek_is(tokens, &TokenKind::Else) {
        tokens.next();
        conditional.else_block = parse_block(tokens)?;
    }

    Ok(conditional)
}

/// Parses `keyword condition block` for `if` and `elif`.
fn parse_branch<'a, I>(tokens: &mut Peekable<I>, keyword: &TokenKind) -> ParseResult<Conditional>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, std::slice::from_ref(keyword))?.position;
    let condition = parse_comparison(tokens)?;
    let block = parse_block(tokens)?;

    Ok(Conditional { condition: Box::new(condition),
                     block,
                     elifs: Vec::new(),
                     else_block: Vec::new(),
                     position })
}
