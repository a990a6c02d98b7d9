//! Error types for barrier operations
//!
//! Neither the remover nor the lenient formatter can fail. These errors come
//! from the strict formatter, price parsing and configuration loading.

use thiserror::Error;

/// Errors that can occur while working with barriers
///
/// # Error Categories
///
/// - **Input Errors**: `NonFiniteValue`, `InvalidPrice`
/// - **Config Errors**: `InvalidConfig`
#[derive(Debug, Error)]
pub enum BarrierError {
    /// Strict formatting received NaN or an infinity
    #[error("Non-finite barrier value: {0}")]
    NonFiniteValue(f64),

    /// A barrier price string could not be parsed as a decimal
    #[error("Invalid barrier price: {0}")]
    InvalidPrice(String),

    /// An environment setting could not be parsed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl BarrierError {
    /// Returns true if the error was caused by a barrier value or price
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BarrierError::NonFiniteValue(_) | BarrierError::InvalidPrice(_)
        )
    }

    /// Returns true if the error came from configuration loading
    pub fn is_config_error(&self) -> bool {
        matches!(self, BarrierError::InvalidConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BarrierError::InvalidPrice("abc".to_string());
        assert_eq!(err.to_string(), "Invalid barrier price: abc");

        let err = BarrierError::NonFiniteValue(f64::NAN);
        assert_eq!(err.to_string(), "Non-finite barrier value: NaN");
    }

    #[test]
    fn test_error_categories() {
        assert!(BarrierError::NonFiniteValue(f64::INFINITY).is_input_error());
        assert!(BarrierError::InvalidPrice("x".to_string()).is_input_error());
        assert!(BarrierError::InvalidConfig("x".to_string()).is_config_error());
        assert!(!BarrierError::InvalidConfig("x".to_string()).is_input_error());
    }
}
