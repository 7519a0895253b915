use super::traits::ConfigSection;
use crate::error::EvomovesError;
use serde::{Deserialize, Serialize};

/// Optional score penalty for genomes whose length strays from a target
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyConfig {
    pub strategy: LengthPunishingStrategy,
    pub factor: f64,
    pub target_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPunishingStrategy {
    None,
    Linear,
    Exponential,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            strategy: LengthPunishingStrategy::None,
            factor: 0.0,
            target_length: 0,
        }
    }
}

impl ConfigSection for PenaltyConfig {
    fn section_name() -> &'static str {
        "penalty"
    }

    fn validate(&self) -> Result<(), EvomovesError> {
        if !self.factor.is_finite() || self.factor < 0.0 {
            return Err(EvomovesError::Configuration(format!(
                "Penalty factor must be a non-negative number (got {})",
                self.factor
            )));
        }
        Ok(())
    }
}
