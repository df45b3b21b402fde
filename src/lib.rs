//! # brisk
//!
//! brisk is a minimal scripting language with two interchangeable back ends.
//! A program can be evaluated directly by walking its syntax tree, or
//! rendered once into equivalent C source text for separate compilation.
//!
//! Each run lexes and parses the source once, then either evaluates or
//! renders it against a fresh [`Environment`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::interpreter::{
    environment::Environment,
    evaluator::core::Evaluator,
    parser::core::parse_program,
    renderer::core::{RenderOptions, Renderer},
};
pub use crate::{error::Error, interpreter::lexer::tokenize};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of a program as a tree. The tree is built by the parser
/// and traversed by the evaluator and the renderer.
///
/// # Responsibilities
/// - Defines the closed set of statement and expression nodes.
/// - Attaches source positions to nodes for error reporting.
/// - Carries the `standalone` marker of expression statements.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error carries the source position it refers to and is meant to be
/// shown to the user unchanged.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, rendering, values
/// and the environment.
pub mod interpreter;
/// General utilities for numeric conversion and message formatting.
pub mod util;

/// Lexes and parses source text into its module node.
///
/// # Errors
/// Returns the first lexical or parse error.
///
/// # Examples
/// ```
/// use brisk::{Error, parse_source};
///
/// assert!(parse_source("let x = 1 + 2;").is_ok());
/// assert!(matches!(parse_source("let x = 1 < 2 < 3;"), Err(Error::Parse(_))));
/// assert!(matches!(parse_source("let x = 1 $ 2;"), Err(Error::Lexical(_))));
/// ```
pub fn parse_source(source: &str) -> Result<ast::Node, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}

/// Evaluates a program, writing the value of every standalone expression to
/// `out` as one line.
///
/// The program runs against a fresh environment. Output written before a
/// runtime error stays written.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use brisk::evaluate_source;
///
/// let mut out = Vec::new();
/// evaluate_source("let x = 7; x / 2; x * 2;", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "3.5\n14\n");
///
/// // 'y' is never assigned.
/// assert!(evaluate_source("y;", &mut Vec::new()).is_err());
/// ```
pub fn evaluate_source<W: Write>(source: &str, out: W) -> Result<(), Error> {
    let module = parse_source(source)?;
    let mut env = Environment::new();

    Evaluator::new(&mut env, out).eval(&module)?;

    debug!(bindings = env.len(), "evaluated module");
    Ok(())
}

/// Renders a program as C source text with the default options.
///
/// # Errors
/// Returns an error if lexing, parsing or rendering fails.
///
/// # Examples
/// ```
/// use brisk::render_source;
///
/// let code = render_source("let x = 7 / 2; x;").unwrap();
/// assert!(code.contains("int x = 7 / 2;"));
/// assert!(code.contains("printf(\"%i\\n\", x);"));
/// ```
pub fn render_source(source: &str) -> Result<String, Error> {
    render_source_with(source, RenderOptions::default())
}

/// Renders a program as C source text.
///
/// # Errors
/// Returns an error if lexing, parsing or rendering fails.
pub fn render_source_with(source: &str, options: RenderOptions) -> Result<String, Error> {
    let module = parse_source(source)?;
    let mut env = Environment::new();

    Ok(Renderer::new(&mut env, options).render(&module, 0)?)
}
