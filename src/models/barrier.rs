use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::barriers::BarrierError;

/// Keys used by the chart for its standard barriers
pub mod keys {
    pub const PURCHASE_SPOT_BARRIER: &str = "PURCHASE_SPOT_BARRIER";
    pub const TAKE_PROFIT: &str = "take_profit";
    pub const STOP_LOSS: &str = "stop_loss";
    pub const STOP_OUT: &str = "stop_out";
}

/// A barrier line drawn on the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barrier {
    /// Lookup key, not required to be unique
    pub key: String,
    /// Display price, string-encoded
    pub high: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
}

impl Barrier {
    pub fn new(key: impl Into<String>, high: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            high: high.into(),
            low: None,
        }
    }

    pub fn with_low(mut self, low: impl Into<String>) -> Self {
        self.low = Some(low.into());
        self
    }

    /// Parse `high` as a decimal price
    pub fn high_price(&self) -> Result<Decimal, BarrierError> {
        Decimal::from_str(self.high.trim()).map_err(|_| {
            BarrierError::InvalidPrice(format!(
                "barrier '{}' has non-numeric high: {}",
                self.key, self.high
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_high_price_parses() {
        let barrier = Barrier::new(keys::TAKE_PROFIT, "2222.22");
        assert_eq!(barrier.high_price().unwrap(), dec!(2222.22));

        let barrier = Barrier::new(keys::STOP_LOSS, "-15");
        assert_eq!(barrier.high_price().unwrap(), dec!(-15));
    }

    #[test]
    fn test_high_price_invalid() {
        let barrier = Barrier::new(keys::STOP_OUT, "n/a");
        let err = barrier.high_price().unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("stop_out"));
    }

    #[test]
    fn test_json_shape() {
        let barrier = Barrier::new(keys::PURCHASE_SPOT_BARRIER, "1111.11");
        let json = serde_json::to_string(&barrier).unwrap();
        assert_eq!(json, r#"{"key":"PURCHASE_SPOT_BARRIER","high":"1111.11"}"#);

        let parsed: Barrier =
            serde_json::from_str(r#"{"key":"stop_loss","high":"10","low":"5"}"#).unwrap();
        assert_eq!(parsed, Barrier::new(keys::STOP_LOSS, "10").with_low("5"));
    }
}
