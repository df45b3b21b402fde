use tracing::trace;

use crate::interpreter::environment::Environment;

/// Prefix of generated loop counter names.
pub const COUNTER_PREFIX: &str = "_r";

/// Hands out loop counter names that no program variable uses.
///
/// Names are `_r0`, `_r1`, ... in order. A number is never handed out twice
/// within one render, and a name that is already bound in the environment is
/// skipped.
#[derive(Debug, Default, Clone)]
pub struct LoopCounters {
    next: usize,
}

impl LoopCounters {
    /// Returns the next counter name not bound in `env`.
    ///
    /// ## Example
    /// ```
    /// use brisk::interpreter::{
    ///     environment::Environment, renderer::counter::LoopCounters, value::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.define("_r1", Value::Integer(0));
    ///
    /// let mut counters = LoopCounters::default();
    /// assert_eq!(counters.next_free(&env), "_r0");
    /// assert_eq!(counters.next_free(&env), "_r2");
    /// ```
    pub fn next_free(&mut self, env: &Environment) -> String {
        loop {
            let name = format!("{COUNTER_PREFIX}{}", self.next);
            self.next += 1;

            if !env.contains(&name) {
                trace!(%name, "loop counter");
                return name;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::Value;

    #[test]
    fn skips_every_bound_name() {
        let mut env = Environment::new();
        for taken in ["_r0", "_r1", "_r2"] {
            env.define(taken, Value::Integer(1));
        }

        let mut counters = LoopCounters::default();
        assert_eq!(counters.next_free(&env), "_r3");
    }

    #[test]
    fn never_repeats_a_name() {
        let env = Environment::new();
        let mut counters = LoopCounters::default();

        let first = counters.next_free(&env);
        let second = counters.next_free(&env);
        assert_ne!(first, second);
    }
}
