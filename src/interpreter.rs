/// The environment module holds the symbol table shared by one traversal.
///
/// Evaluation and rendering both read and write it: evaluation stores
/// runtime values, rendering stores the values of the assignments it has
/// emitted.
pub mod environment;
/// The evaluator module executes syntax trees directly.
///
/// The evaluator traverses the tree, evaluates expressions and statements,
/// manages variable state and prints the value of every standalone
/// expression.
///
/// # Responsibilities
/// - Evaluates every node variant.
/// - Handles variables and control flow (`if` chains and `repeat` loops).
/// - Reports runtime errors such as unresolved names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// integer literals, identifiers, keywords and single-character operators,
/// each with the line and column where it starts.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Skips whitespace and `#` comments.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// A recursive-descent parser with one token of lookahead. It builds the
/// tree directly and stops at the first error.
///
/// # Responsibilities
/// - Converts tokens into [`Node`](crate::ast::Node)s under a single module
///   root.
/// - Encodes operator precedence and the statement grammar.
/// - Reports the expected and actual token with its position on failure.
pub mod parser;
/// The renderer module translates syntax trees into C source text.
///
/// The emitted program can be compiled separately and prints the same lines
/// as evaluating the script, except that its variables are `int`, so
/// division truncates.
pub mod renderer;
/// The value module defines the runtime data types for evaluation.
pub mod value;
