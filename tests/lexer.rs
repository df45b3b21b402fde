use brisk::{
    ast::Position,
    error::LexicalError,
    interpreter::lexer::{TokenKind, tokenize},
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"))
                 .into_iter()
                 .map(|token| token.kind)
                 .collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

#[test]
fn assignment_tokens() {
    assert_eq!(kinds("let x = 12;"),
               vec![TokenKind::Let,
                    ident("x"),
                    TokenKind::Equals,
                    TokenKind::Integer(12),
                    TokenKind::Semicolon]);
}

#[test]
fn keywords_and_operators() {
    assert_eq!(kinds("if elif else repeat and or not { } ( ) < > + - * / : ?"),
               vec![TokenKind::If,
                    TokenKind::Elif,
                    TokenKind::Else,
                    TokenKind::Repeat,
                    TokenKind::And,
                    TokenKind::Or,
                    TokenKind::Not,
                    TokenKind::LBrace,
                    TokenKind::RBrace,
                    TokenKind::LParen,
                    TokenKind::RParen,
                    TokenKind::Less,
                    TokenKind::Greater,
                    TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Star,
                    TokenKind::Slash,
                    TokenKind::Colon,
                    TokenKind::Question]);
}

#[test]
fn identifiers_take_the_longest_match() {
    assert_eq!(kinds("letter iffy repeat_2 _x elsewhere"),
               vec![ident("letter"),
                    ident("iffy"),
                    ident("repeat_2"),
                    ident("_x"),
                    ident("elsewhere")]);
}

#[test]
fn integers_stop_at_letters() {
    assert_eq!(kinds("12ab"), vec![TokenKind::Integer(12), ident("ab")]);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(kinds("1; # the rest ; is ignored\n2;"),
               vec![TokenKind::Integer(1),
                    TokenKind::Semicolon,
                    TokenKind::Integer(2),
                    TokenKind::Semicolon]);
    assert!(kinds("# nothing here").is_empty());
}

#[test]
fn positions_are_line_and_column() {
    let tokens = tokenize("let x = 1;\n  x;\n\n\tx + 2;").unwrap();
    let positions: Vec<Position> = tokens.iter().map(|token| token.position).collect();

    assert_eq!(positions,
               vec![Position::new(1, 1),
                    Position::new(1, 5),
                    Position::new(1, 7),
                    Position::new(1, 9),
                    Position::new(1, 10),
                    Position::new(2, 3),
                    Position::new(2, 4),
                    Position::new(4, 2),
                    Position::new(4, 4),
                    Position::new(4, 6),
                    Position::new(4, 7)]);
}

#[test]
fn columns_count_characters() {
    let err = tokenize("# é\n  é").unwrap_err();
    assert_eq!(err,
               LexicalError::UnexpectedCharacter { character: 'é',
                                                   position:  Position::new(2, 3), });
}

#[test]
fn unexpected_character() {
    let err = tokenize("let x = 3 % 2;").unwrap_err();

    assert_eq!(err,
               LexicalError::UnexpectedCharacter { character: '%',
                                                   position:  Position::new(1, 11), });
    assert_eq!(err.to_string(), "'%' not accepted (1:11)");
}

#[test]
fn equality_is_not_a_token() {
    // '=' followed by '=' lexes as two tokens; the parser rejects the pair.
    assert_eq!(kinds("=="), vec![TokenKind::Equals, TokenKind::Equals]);
}

#[test]
fn oversized_literal() {
    let err = tokenize("1;\n99999999999999999999;").unwrap_err();

    assert!(matches!(&err, LexicalError::LiteralTooLarge { literal, .. } if literal == "99999999999999999999"));
    assert_eq!(err.position(), Position::new(2, 1));
}

#[test]
fn display_matches_source_text() {
    let rendered: Vec<String> = kinds("let total = 3 ;").iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["let", "total", "=", "3", ";"]);
}
