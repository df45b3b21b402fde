use std::io::Write;

use tracing::trace;

use crate::{
    ast::{Node, Position},
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl<W: Write> Evaluator<'_, W> {
    /// Evaluates a `repeat` loop.
    ///
    /// The bound is evaluated exactly once, before the first iteration.
    /// Assigning to variables used by the bound inside the body does not
    /// change how often the body runs. A negative bound runs the body zero
    /// times.
    ///
    /// # Parameters
    /// - `times`: The bound expression.
    /// - `block`: The loop body.
    /// - `position`: Position of the `repeat` keyword.
    ///
    /// # Errors
    /// [`RuntimeError::InvalidRepeatBound`](crate::error::RuntimeError::InvalidRepeatBound)
    /// if the bound is a fractional real, or any error raised by the body.
    pub(crate) fn eval_repeat(&mut self,
                              times: &Node,
                              block: &[Node],
                              position: Position)
                              -> EvalResult<()> {
        let iterations = self.eval_value(times)?.to_iterations(position)?;
        trace!(iterations, %position, "repeat");

        for _ in 0..iterations {
            self.eval_block(block)?;
        }

        Ok(())
    }
}
