use serde::{Deserialize, Serialize};

use crate::amount::AmountPolicy;
use crate::error::ConfigError;

/// Settings for an expense tracking session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Literal prefix for displayed amounts
    pub currency_symbol: String,
    pub amount_policy: AmountPolicy,
    pub enable_debug_logging: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            amount_policy: AmountPolicy::Strict,
            enable_debug_logging: false,
        }
    }
}

impl TrackerConfig {
    /// Parse a config object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
