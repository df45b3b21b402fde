use std::fmt;

use logos::Logos;
use tracing::debug;

use crate::{ast::Position, error::LexicalError};

/// The kind of a lexical token, together with its literal value.
///
/// Keywords are matched exactly after the identifier rule has taken the
/// longest run of identifier characters, so `letter` is an identifier while
/// `let` is a keyword.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Decimal integer literals, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// `and`, reserved but not used by the grammar.
    #[token("and")]
    And,
    /// `or`, reserved but not used by the grammar.
    #[token("or")]
    Or,
    /// `not`, reserved but not used by the grammar.
    #[token("not")]
    Not,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `?`
    #[token("?")]
    Question,
    /// `# Comments` running to the end of the line.
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Newlines only move the position forward.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f\x0B]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Short human-readable name used when a token kind is expected.
    ///
    /// ## Example
    /// ```
    /// use brisk::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Semicolon.name(), ";");
    /// assert_eq!(TokenKind::Integer(7).name(), "integer");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Identifier(_) => "identifier",
            Self::Let => "let",
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Repeat => "repeat",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Question => "?",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
        }
    }

    /// Whether the token is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self,
                 Self::Let
                 | Self::If
                 | Self::Elif
                 | Self::Else
                 | Self::And
                 | Self::Or
                 | Self::Not
                 | Self::Repeat)
    }
}

/// Writes the token as it appeared in the source.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Identifier(name) => f.write_str(name),
            other => f.write_str(other.name()),
        }
    }
}

/// A token paired with the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was matched, including the literal value for integers and
    /// identifiers.
    pub kind:     TokenKind,
    /// Where the token starts.
    pub position: Position,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts so columns can
/// be derived from token spans.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal does not fit a signed 64-bit integer.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Splits source text into tokens.
///
/// Performs a single forward pass. Whitespace and `#` comments are skipped
/// but still advance the position. The first unrecognized character stops
/// tokenization.
///
/// # Errors
/// - [`LexicalError::UnexpectedCharacter`] for a character that starts no
///   token.
/// - [`LexicalError::LiteralTooLarge`] for an integer literal outside the
///   signed 64-bit range.
///
/// # Example
/// ```
/// use brisk::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("let x = 4;\nx;").unwrap();
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[3].kind, TokenKind::Integer(4));
/// assert_eq!(tokens[5].position.line, 2);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let line_start = lexer.extras.line_start;
        let column = source[line_start..span.start].chars().count() + 1;
        let position = Position::new(lexer.extras.line, column);

        match result {
            Ok(kind) => tokens.push(Token { kind, position }),
            Err(()) => {
                let slice = lexer.slice();
                let character = slice.chars().next().unwrap_or_default();

                if character.is_ascii_digit() {
                    return Err(LexicalError::LiteralTooLarge { literal: slice.to_string(),
                                                               position });
                }

                return Err(LexicalError::UnexpectedCharacter { character, position });
            },
        }
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
