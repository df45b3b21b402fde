use std::fmt;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_u64_checked, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// Source programs only contain integers. Reals appear as the result of `/`,
/// and booleans as the result of `<` and `>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A real value (double precision floating-point), produced by division.
    Real(f64),
    /// A boolean value, produced by comparisons and used as a condition.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Whether the value counts as true when used as a condition.
    ///
    /// Numbers are true when they are not zero.
    ///
    /// ## Example
    /// ```
    /// use brisk::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(-2).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(Value::Bool(true).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Integer(n) => n != 0,
            Self::Real(r) => r != 0.0,
            Self::Bool(b) => b,
        }
    }

    /// Whether the value is a real number.
    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real(_))
    }

    /// The value as an integer; `true` and `false` count as `1` and `0`.
    ///
    /// Returns `None` for reals.
    #[must_use]
    pub const fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Bool(b) => Some(b as i64),
            Self::Real(_) => None,
        }
    }

    /// The value promoted to a real number.
    #[must_use]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
            Self::Bool(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            },
        }
    }

    /// Converts the value into a number of loop iterations.
    ///
    /// Negative bounds run the loop zero times. Reals are accepted only when
    /// they are whole numbers.
    ///
    /// # Errors
    /// Returns [`RuntimeError::InvalidRepeatBound`] for fractional or
    /// non-finite reals.
    pub fn to_iterations(self, position: Position) -> EvalResult<u64> {
        match self {
            Self::Real(r) => {
                f64_to_u64_checked(r, RuntimeError::InvalidRepeatBound { bound: self.to_string(),
                                                                         position })
            },
            other => Ok(other.as_integer()
                             .map_or(0, |n| u64::try_from(n).unwrap_or(0))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
