use std::iter::Peekable;

use crate::{
    ast::{ArithmeticOperator, ComparisonOperator, Node},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// A `Node::Arithmetic` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_arithmetic_operator(&token.kind)
           && matches!(op, ArithmeticOperator::Add | ArithmeticOperator::Sub)
        {
            let position = token.position;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Node::Arithmetic { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      standalone: false,
                                      position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_arithmetic_operator(&token.kind)
           && matches!(op, ArithmeticOperator::Mul | ArithmeticOperator::Div)
        {
            let position = token.position;
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Node::Arithmetic { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      standalone: false,
                                      position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses an expression with at most one comparison.
///
/// Comparisons do not chain: after `a < b` the caller sees the next `<` as
/// an unexpected token, so `a < b < c` is rejected.
///
/// The rule is: `comparison := additive (("<" | ">") additive)?`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// A `Node::Comparison`, or the additive expression alone when no
/// comparison operator follows it.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_additive(tokens)?;

    if let Some(token) = tokens.peek()
       && let Some(op) = token_to_comparison_operator(&token.kind)
    {
        let position = token.position;
        tokens.next(); // consume operator

        let right = parse_additive(tokens)?;
        return Ok(Node::Comparison { left: Box::new(left),
                                     op,
                                     right: Box::new(right),
                                     position });
    }

    Ok(left)
}

/// Maps a token to its arithmetic operator.
///
/// # Example
/// ```
/// use brisk::{
///     ast::ArithmeticOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_arithmetic_operator},
/// };
///
/// assert_eq!(token_to_arithmetic_operator(&TokenKind::Star), Some(ArithmeticOperator::Mul));
/// assert_eq!(token_to_arithmetic_operator(&TokenKind::Less), None);
/// ```
#[must_use]
pub const fn token_to_arithmetic_operator(token: &TokenKind) -> Option<ArithmeticOperator> {
    match token {
        TokenKind::Plus => Some(ArithmeticOperator::Add),
        TokenKind::Minus => Some(ArithmeticOperator::Sub),
        TokenKind::Star => Some(ArithmeticOperator::Mul),
        TokenKind::Slash => Some(ArithmeticOperator::Div),
        _ => None,
    }
}

/// Maps a token to its comparison operator.
#[must_use]
pub const fn token_to_comparison_operator(token: &TokenKind) -> Option<ComparisonOperator> {
    match token {
        TokenKind::Less => Some(ComparisonOperator::Less),
        TokenKind::Greater => Some(ComparisonOperator::Greater),
        _ => None,
    }
}
