use std::io::Write;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator and the renderer.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes a syntax tree directly.
///
/// The evaluator borrows the environment for the duration of one traversal
/// and writes one line to `out` for every standalone expression it
/// evaluates, in source order.
///
/// ## Example
/// ```
/// use brisk::{
///     interpreter::{environment::Environment, evaluator::core::Evaluator, value::Value},
///     parse_source,
/// };
///
/// let module = parse_source("let x = 6; x * 7;").unwrap();
/// let mut env = Environment::new();
/// let mut out = Vec::new();
///
/// Evaluator::new(&mut env, &mut out).eval(&module).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "42\n");
/// assert_eq!(env.get("x"), Some(Value::Integer(6)));
/// ```
pub struct Evaluator<'env, W> {
    /// Bindings read and written by the traversal.
    pub(crate) env: &'env mut Environment,
    out:            W,
}

impl<'env, W: Write> Evaluator<'env, W> {
    /// Creates an evaluator over `env` that prints to `out`.
    pub const fn new(env: &'env mut Environment, out: W) -> Self {
        Self { env, out }
    }

    /// Evaluates a node.
    ///
    /// This is the main entry point for evaluation. Expressions produce
    /// `Some(Value)`; statements and the module produce `None` and only act
    /// through the environment and the output.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised anywhere below `node`.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::Module { statements } => {
                self.eval_block(statements)?;
                Ok(None)
            },
            Node::Literal { value, standalone, .. } => {
                self.emit(Value::Integer(*value), *standalone).map(Some)
            },
            Node::Reference { name,
                              standalone,
                              position, } => {
                let value = self.env.resolve(name, *position)?;
                self.emit(value, *standalone).map(Some)
            },
            Node::Arithmetic { left,
                               op,
                               right,
                               standalone,
                               position, } => {
                let left = self.eval_value(left)?;
                let right = self.eval_value(right)?;
                let value = Self::eval_arithmetic(*op, left, right, *position)?;
                self.emit(value, *standalone).map(Some)
            },
            Node::Comparison { left, op, right, .. } => {
                let left = self.eval_value(left)?;
                let right = self.eval_value(right)?;
                Ok(Some(Self::eval_comparison(*op, left, right)))
            },
            Node::Assignment { name, value, .. } => {
                let value = self.eval_value(value)?;
                self.env.define(name.as_str(), value);
                Ok(None)
            },
            Node::Ternary { condition,
                            if_true,
                            if_false,
                            .. } => {
                if self.eval_value(condition)?.is_truthy() {
                    self.eval(if_true)
                } else {
                    self.eval(if_false)
                }
            },
            Node::Conditional(conditional) => {
                self.eval_conditional(conditional)?;
                Ok(None)
            },
            Node::Repeat { times,
                           block,
                           position, } => {
                self.eval_repeat(times, block, *position)?;
                Ok(None)
            },
        }
    }

    /// Evaluates a node that must produce a value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MissingValue`] if `node` is a statement, or
    /// any error raised while evaluating it.
    pub fn eval_value(&mut self, node: &Node) -> EvalResult<Value> {
        self.eval(node)?
            .ok_or(RuntimeError::MissingValue { position: node.position() })
    }

    /// Evaluates statements in order.
    pub(crate) fn eval_block(&mut self, statements: &[Node]) -> EvalResult<()> {
        for statement in statements {
            self.eval(statement)?;
        }
        Ok(())
    }

    /// Prints `value` on its own line if it belongs to a standalone
    /// expression, and passes it through.
    fn emit(&mut self, value: Value, standalone: bool) -> EvalResult<Value> {
        if standalone {
            writeln!(self.out, "{value}")?;
        }
        Ok(value)
    }
}
