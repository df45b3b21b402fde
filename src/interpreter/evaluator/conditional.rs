use std::io::Write;

use crate::{
    ast::Conditional,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl<W: Write> Evaluator<'_, W> {
    /// Evaluates an `if`/`elif`/`else` chain.
    ///
    /// The first branch whose condition holds runs and ends the search; the
    /// `else` block runs only when no condition holds.
    ///
    /// # Returns
    /// `true` if this conditional or one of its `elif` branches handled the
    /// chain, `false` if it fell through to the `else` block or did nothing.
    pub(crate) fn eval_conditional(&mut self, conditional: &Conditional) -> EvalResult<bool> {
        if self.eval_value(&conditional.condition)?.is_truthy() {
            self.eval_block(&conditional.block)?;
            return Ok(true);
        }

        for elif in &conditional.elifs {
            if self.eval_conditional(elif)? {
                return Ok(true);
            }
        }

        self.eval_block(&conditional.else_block)?;
        Ok(false)
    }
}
