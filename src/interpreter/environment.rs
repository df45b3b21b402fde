use std::collections::HashMap;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// The symbol table shared by one traversal of a program.
///
/// There is a single flat namespace: `repeat` and `if` bodies read and write
/// the same bindings as the top level. Names are only ever added or
/// overwritten, never removed.
///
/// Evaluation stores runtime values here. Rendering stores the values of
/// rendered assignments too, which is how it knows whether a name has been
/// declared yet and what a `repeat` bound evaluates to.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    symbols: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.symbols.insert(name.into(), value);
    }

    /// Looks up a binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.symbols.get(name).copied()
    }

    /// Looks up a binding that must exist.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnresolvedIdentifier`] if `name` was never
    /// bound.
    ///
    /// ## Example
    /// ```
    /// use brisk::{
    ///     ast::Position,
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Integer(2));
    ///
    /// assert_eq!(env.resolve("x", Position::default()).unwrap(), Value::Integer(2));
    /// assert!(env.resolve("y", Position::default()).is_err());
    /// ```
    pub fn resolve(&self, name: &str, position: Position) -> EvalResult<Value> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UnresolvedIdentifier { name: name.to_string(),
                                                                position })
    }

    /// Whether `name` has a binding.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether nothing has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
