use crate::error::EvomovesError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), EvomovesError>;
}

/// Shared check for probabilities in [0, 1]
pub(crate) fn check_rate(section: &str, name: &str, value: f64) -> Result<(), EvomovesError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(EvomovesError::Configuration(format!(
            "{}.{} must be between 0 and 1 (got {})",
            section, name, value
        )));
    }
    Ok(())
}
