//! Barrier display formatting
//!
//! Barriers reach the chart as plain numbers. Relative barriers are offsets
//! from the current spot and carry an explicit sign in their display string,
//! absolute barriers never do.

use rust_decimal::Decimal;

use super::errors::BarrierError;

/// Format a single barrier value for display
///
/// # Rules
/// - Zero renders as `"0"`, including negative zero
/// - Integral values render without a fractional part (`15.0` -> `"15"`)
/// - When `is_relative` is true, values `>= 0` get a leading `+`
/// - Negative values keep their `-` regardless of `is_relative`
/// - NaN and infinities pass through as `"NaN"`, `"Infinity"`, `"-Infinity"`
pub fn format_barrier(is_relative: bool, value: f64) -> String {
    // -0.0 would otherwise display as "-0"
    let value = if value == 0.0 { 0.0 } else { value };

    let text = if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    };

    if is_relative && value >= 0.0 {
        format!("+{}", text)
    } else {
        text
    }
}

/// Convert a pair of barrier offsets into their display strings
///
/// Output order follows input order: `[barrier1, barrier2]`.
///
/// # Example
/// ```ignore
/// assert_eq!(barriers_to_string(false, 10.0, 15.0), ["10", "15"]);
/// assert_eq!(barriers_to_string(true, 11.0, 15.0), ["+11", "+15"]);
/// ```
pub fn barriers_to_string(is_relative: bool, barrier1: f64, barrier2: f64) -> [String; 2] {
    [
        format_barrier(is_relative, barrier1),
        format_barrier(is_relative, barrier2),
    ]
}

/// Strict variant of [`barriers_to_string`] that rejects NaN and infinities
///
/// # Returns
/// * `Ok([String; 2])` if both values are finite
/// * `Err(BarrierError::NonFiniteValue)` with the first offending value
pub fn try_barriers_to_string(
    is_relative: bool,
    barrier1: f64,
    barrier2: f64,
) -> Result<[String; 2], BarrierError> {
    for value in [barrier1, barrier2] {
        if !value.is_finite() {
            tracing::warn!(value, "Rejecting non-finite barrier value");
            return Err(BarrierError::NonFiniteValue(value));
        }
    }
    Ok(barriers_to_string(is_relative, barrier1, barrier2))
}

/// Format a decimal barrier price, keeping its scale
///
/// Same sign rules as [`format_barrier`]: `dec!(11.50)` renders as
/// `"+11.50"` when relative and `"11.50"` otherwise.
pub fn format_decimal_barrier(is_relative: bool, value: Decimal) -> String {
    let value = if value.is_zero() { value.abs() } else { value };

    if is_relative && !value.is_sign_negative() {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
