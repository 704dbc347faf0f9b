use serde::{Deserialize, Serialize};

use crate::errors::{MiningError, Result};

/// Mining configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Minimum support threshold in (0.0, 1.0]
    /// Example: 0.1 = pattern must appear in at least 10% of transactions
    pub min_support: f64,

    /// Minimum confidence threshold in (0.0, 1.0]
    /// Reported on mined rules; never used as a mining-time filter
    pub min_confidence: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.1,    // 10%
            min_confidence: 0.1, // 10%
        }
    }
}

impl MiningConfig {
    /// Create a validated configuration.
    pub fn new(min_support: f64, min_confidence: f64) -> Result<Self> {
        let config = Self {
            min_support,
            min_confidence,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check both thresholds against the (0, 1] contract.
    pub fn validate(&self) -> Result<()> {
        validate_fraction(self.min_support, "min_support")?;
        validate_fraction(self.min_confidence, "min_confidence")
    }
}

pub(crate) fn validate_fraction(value: f64, name: &str) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidConfig(format!(
            "{} must lie in (0, 1], got {}",
            name, value
        )))
    }
}
