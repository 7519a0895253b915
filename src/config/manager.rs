use super::{
    evolution::EvolutionConfig,
    oracle::OracleConfig,
    penalty::PenaltyConfig,
    traits::ConfigSection,
};
use crate::error::EvomovesError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `EVOMOVES_EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "EVOMOVES";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub penalty: PenaltyConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), EvomovesError> {
        self.evolution.validate()?;
        self.oracle.validate()?;
        self.penalty.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config file (TOML, JSON or YAML by extension) with environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EvomovesError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(EvomovesError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        self.install(settings)
    }

    /// Parse an in-memory TOML document.
    pub fn load_from_toml_str(&mut self, contents: &str) -> Result<(), EvomovesError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;

        self.install(settings)
    }

    fn install(&mut self, settings: Config) -> Result<(), EvomovesError> {
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EvomovesError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| EvomovesError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| EvomovesError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Apply a change; the stored config is only replaced if the result validates.
    pub fn update<F>(&mut self, f: F) -> Result<(), EvomovesError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

/// Load and validate a config file in one call.
pub fn load_app_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, EvomovesError> {
    let mut manager = ConfigManager::new();
    manager.load_from_file(path)?;
    Ok(manager.config)
}
