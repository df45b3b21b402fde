use crate::{
    ast::{ArithmeticOperator, ComparisonOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl<W> Evaluator<'_, W> {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Division is always real-valued, so `7 / 2` is `3.5` even though both
    /// operands are integers. The other operators stay integral unless either
    /// operand is real, and report overflow instead of wrapping.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] when dividing by zero.
    /// - [`RuntimeError::Overflow`] when integer arithmetic overflows.
    ///
    /// # Example
    /// ```
    /// use brisk::{
    ///     ast::{ArithmeticOperator, Position},
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let half = Evaluator::<Vec<u8>>::eval_arithmetic(ArithmeticOperator::Div,
    ///                                                  Value::Integer(7),
    ///                                                  Value::Integer(2),
    ///                                                  Position::default());
    /// assert_eq!(half.unwrap(), Value::Real(3.5));
    /// ```
    pub fn eval_arithmetic(op: ArithmeticOperator,
                           left: Value,
                           right: Value,
                           position: Position)
                           -> EvalResult<Value> {
        let (integer_op, real_op): (fn(i64, i64) -> Option<i64>, fn(f64, f64) -> f64) = match op {
            ArithmeticOperator::Add => (i64::checked_add, |l, r| l + r),
            ArithmeticOperator::Sub => (i64::checked_sub, |l, r| l - r),
            ArithmeticOperator::Mul => (i64::checked_mul, |l, r| l * r),
            ArithmeticOperator::Div => {
                let divisor = right.as_real();
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                return Ok(Value::Real(left.as_real() / divisor));
            },
        };

        match (left.as_integer(), right.as_integer()) {
            (Some(l), Some(r)) => integer_op(l, r).map(Value::Integer)
                                                  .ok_or(RuntimeError::Overflow { position }),
            _ => Ok(Value::Real(real_op(left.as_real(), right.as_real()))),
        }
    }

    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Integers compare exactly; as soon as one side is real both are
    /// promoted to real numbers.
    #[must_use]
    pub fn eval_comparison(op: ComparisonOperator, left: Value, right: Value) -> Value {
        let result = match (left.as_integer(), right.as_integer()) {
            (Some(l), Some(r)) => match op {
                ComparisonOperator::Less => l < r,
                ComparisonOperator::Greater => l > r,
            },
            _ => {
                let (l, r) = (left.as_real(), right.as_real());
                match op {
                    ComparisonOperator::Less => l < r,
                    ComparisonOperator::Greater => l > r,
                }
            },
        };
        Value::Bool(result)
    }
}
