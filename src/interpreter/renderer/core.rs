use std::io;

use tracing::debug;

use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        renderer::counter::LoopCounters,
        value::Value,
    },
};

/// Default number of spaces per nesting level in rendered text.
pub const DEFAULT_INDENT_STEP: usize = 4;

/// Options controlling the shape of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces added for every nested block.
    pub indent_step: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent_step: DEFAULT_INDENT_STEP }
    }
}

/// Translates a syntax tree into C source text.
///
/// Rendering threads the same [`Environment`] as evaluation. Every rendered
/// assignment evaluates its right-hand side and stores the result, which
/// decides whether the assignment needs an `int` declaration and gives
/// `repeat` loops a concrete bound to emit. The environment therefore holds
/// values after rendering and must not be reused for evaluation.
///
/// ## Example
/// ```
/// use brisk::{
///     interpreter::{
///         environment::Environment,
///         renderer::core::{RenderOptions, Renderer},
///     },
///     parse_source,
/// };
///
/// let module = parse_source("let x = 1; let x = x + 1;").unwrap();
/// let mut env = Environment::new();
/// let text = Renderer::new(&mut env, RenderOptions::default()).render(&module, 0)
///                                                             .unwrap();
///
/// assert!(text.contains("    int x = 1;\n    x = x + 1;\n"));
/// ```
pub struct Renderer<'env> {
    pub(crate) env:      &'env mut Environment,
    pub(crate) counters: LoopCounters,
    pub(crate) options:  RenderOptions,
}

impl<'env> Renderer<'env> {
    /// Creates a renderer over `env`.
    pub fn new(env: &'env mut Environment, options: RenderOptions) -> Self {
        Self { env,
               counters: LoopCounters::default(),
               options }
    }

    /// Renders a node at the given indentation.
    ///
    /// Statements come back with their indentation applied; a non-standalone
    /// expression comes back as bare expression text.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`](crate::error::RuntimeError) raised
    /// while resolving names or evaluating values below `node`.
    pub fn render(&mut self, node: &Node, indent: usize) -> EvalResult<String> {
        match node {
            Node::Module { statements } => self.render_module(statements, indent),
            Node::Assignment { name, value, .. } => self.render_assignment(name, value, indent),
            Node::Conditional(conditional) => self.render_conditional(conditional, indent),
            Node::Repeat { times,
                           block,
                           position, } => self.render_repeat(times, block, *position, indent),
            expr if expr.is_standalone() => self.render_print(expr, indent),
            expr => self.render_expression(expr),
        }
    }

    /// Wraps the program in a `main` function that reports how long it ran.
    fn render_module(&mut self, statements: &[Node], indent: usize) -> EvalResult<String> {
        let inner = indent + self.options.indent_step;
        let pad = " ".repeat(inner);

        let mut code = String::from("#include <stdio.h>\n#include <time.h>\n\nint main() {\n");
        code.push_str(&format!("{pad}clock_t start_time = clock();\n"));

        for statement in statements {
            code.push_str(&self.render(statement, inner)?);
            code.push('\n');
        }

        code.push_str(&format!("{pad}double elapsed_time = (double)(clock() - start_time) / CLOCKS_PER_SEC;\n"));
        code.push_str(&format!("{pad}printf(\"Executed in %f seconds.\\n\", elapsed_time);\n"));
        code.push_str(&format!("{pad}return 0;\n"));
        code.push_str(&" ".repeat(indent));
        code.push('}');

        debug!(bytes = code.len(), "rendered module");
        Ok(code)
    }

    /// Renders statements one per line, each preceded by a newline.
    pub(crate) fn render_block(&mut self, block: &[Node], indent: usize) -> EvalResult<String> {
        let mut code = String::new();
        for statement in block {
            code.push('\n');
            code.push_str(&self.render(statement, indent)?);
        }
        Ok(code)
    }

    /// Evaluates an expression against the shared environment.
    ///
    /// Only non-standalone expressions reach this, so nothing is printed.
    pub(crate) fn evaluate(&mut self, node: &Node) -> EvalResult<Value> {
        Evaluator::new(&mut *self.env, io::sink()).eval_value(node)
    }
}
