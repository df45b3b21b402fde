use std::iter::Peekable;

use crate::{
    ast::{ArithmeticOperator, Node, Position},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Token kinds that can start a factor, as reported in errors.
const FACTOR_START: &[&str] = &["integer", "identifier", "(", "+", "-"];

/// Parses a factor: the tightest-binding level of an expression.
///
/// A leading `+` is dropped and a leading `-` negates the factor that follows
/// it. Signs may repeat, so `--x` is `x` negated twice.
///
/// Grammar:
/// ```text
///     factor := integer
///             | identifier
///             | "(" expression ")"
///             | ("+" | "-") factor
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed [`Node`] or a `ParseError` on failure.
///
/// # Errors
/// - `IdentifierReserved` if a reserved word appears where a name could.
/// - `UnexpectedToken` for any other token that cannot start a factor.
/// - `UnexpectedEndOfInput` if the tokens run out.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next()
                      .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected:
                                                                            FACTOR_START.to_vec(), })?;

    match &token.kind {
        TokenKind::Integer(value) => Ok(Node::Literal { value:      *value,
                                                        standalone: false,
                                                        position:   token.position, }),
        TokenKind::Identifier(name) => Ok(Node::Reference { name:       name.clone(),
                                                            standalone: false,
                                                            position:   token.position, }),
        TokenKind::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &[TokenKind::RParen])?;
            Ok(expr)
        },
        TokenKind::Plus => parse_factor(tokens),
        TokenKind::Minus => {
            let operand = parse_factor(tokens)?;
            Ok(negate(operand, token.position))
        },
        TokenKind::And | TokenKind::Or | TokenKind::Not => {
            Err(ParseError::IdentifierReserved { name:     token.kind.to_string(),
                                                 position: token.position, })
        },
        _ => Err(unexpected(token, FACTOR_START)),
    }
}

/// Negates a factor without introducing a dedicated node.
///
/// Literals fold into a negative literal; anything else becomes
/// `-1 * operand`.
fn negate(operand: Node, position: Position) -> Node {
    match operand {
        Node::Literal { value,
                        standalone,
                        position: literal_position, } => Node::Literal { value: -value,
                                                                         standalone,
                                                                         position:
                                                                             literal_position },
        other => Node::Arithmetic { left: Box::new(Node::Literal { value: -1,
                                                                   standalone: false,
                                                                   position }),
                                    op: ArithmeticOperator::Mul,
                                    right: Box::new(other),
                                    standalone: false,
                                    position },
    }
}
