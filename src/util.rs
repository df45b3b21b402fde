/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
pub mod num;
/// Text helpers shared by error messages.
pub mod text;
