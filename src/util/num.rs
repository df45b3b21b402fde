/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if and only if it is a whole number that
/// fits exactly.
///
/// Negative whole numbers are clamped to zero, matching how a loop with a
/// negative bound runs no iterations.
///
/// ## Errors
/// Returns `Err(error)` if the value is fractional, not finite, or larger than
/// `MAX_SAFE_U64_INT`.
///
/// ## Parameters
/// - `value`: The float to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use brisk::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(3.0, "bad"), Ok(3));
/// assert_eq!(f64_to_u64_checked(-2.0, "bad"), Ok(0));
/// assert_eq!(f64_to_u64_checked(2.5, "bad"), Err("bad"));
/// assert_eq!(f64_to_u64_checked(f64::INFINITY, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss)]
pub fn f64_to_u64_checked<E>(value: f64, error: E) -> Result<u64, E> {
    if !value.is_finite() || value.fract() != 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(error);
    }
    if value <= 0.0 {
        return Ok(0);
    }
    Ok(value as u64)
}

/// Converts an `i64` to `f64` for mixed integer and real arithmetic.
///
/// Values beyond `2^53` round to the nearest representable float, the same
/// way integers promote to reals anywhere else.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}
