use serde::{Deserialize, Serialize};

use crate::barriers::BarrierError;

pub const ENV_IS_RELATIVE: &str = "BARRIER_IS_RELATIVE";
pub const ENV_STRICT: &str = "BARRIER_STRICT";

/// How barrier values are rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarrierDisplayConfig {
    /// Treat barriers as offsets from spot and keep an explicit sign
    #[serde(default)]
    pub is_relative: bool,

    /// Reject NaN and infinities instead of passing them through
    #[serde(default)]
    pub strict: bool,
}

impl BarrierDisplayConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, BarrierError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup; unset variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BarrierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_IS_RELATIVE) {
            config.is_relative = parse_flag(ENV_IS_RELATIVE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_STRICT) {
            config.strict = parse_flag(ENV_STRICT, &raw)?;
        }
        Ok(config)
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, BarrierError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(BarrierError::InvalidConfig(format!(
            "{} must be a boolean, got: {}",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = BarrierDisplayConfig::default();
        assert!(!config.is_relative);
        assert!(!config.strict);
    }

    #[test]
    fn test_unset_variables_keep_defaults() {
        let config = BarrierDisplayConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, BarrierDisplayConfig::default());
    }

    #[test]
    fn test_flags_parsed() {
        let config = BarrierDisplayConfig::from_lookup(lookup_from(&[
            (ENV_IS_RELATIVE, "true"),
            (ENV_STRICT, " ON "),
        ]))
        .unwrap();
        assert!(config.is_relative);
        assert!(config.strict);
    }

    #[test]
    fn test_invalid_flag() {
        let err = BarrierDisplayConfig::from_lookup(lookup_from(&[(ENV_IS_RELATIVE, "maybe")]))
            .unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains(ENV_IS_RELATIVE));
    }

    #[test]
    fn test_serde_defaults() {
        let config: BarrierDisplayConfig =
            serde_json::from_str(r#"{"is_relative":true}"#).unwrap();
        assert!(config.is_relative);
        assert!(!config.strict);
    }
}
