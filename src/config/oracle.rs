use super::traits::ConfigSection;
use crate::error::EvomovesError;
use serde::{Deserialize, Serialize};

/// Where genomes get scored and what score counts as solved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    pub url: String,
    pub acceptance_threshold: f64,
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_string(),
            acceptance_threshold: 3500.0,
            timeout_secs: 30,
        }
    }
}

impl ConfigSection for OracleConfig {
    fn section_name() -> &'static str {
        "oracle"
    }

    fn validate(&self) -> Result<(), EvomovesError> {
        if self.url.trim().is_empty() {
            return Err(EvomovesError::Configuration(
                "Oracle url must not be empty".to_string()
            ));
        }
        if !self.acceptance_threshold.is_finite() {
            return Err(EvomovesError::Configuration(format!(
                "Acceptance threshold must be finite (got {})",
                self.acceptance_threshold
            )));
        }
        if self.timeout_secs == 0 {
            return Err(EvomovesError::Configuration(
                "Oracle timeout must be at least one second".to_string()
            ));
        }
        Ok(())
    }
}
