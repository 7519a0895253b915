pub mod traits;
pub mod evolution;
pub mod oracle;
pub mod penalty;
pub mod manager;

pub use manager::{load_app_config, AppConfig, ConfigManager};
pub use evolution::{
    CrossoverStrategy, EvolutionConfig, LeftoverStrategy, MutationTarget, SelectionStrategy,
};
pub use oracle::OracleConfig;
pub use penalty::{LengthPunishingStrategy, PenaltyConfig};
pub use traits::ConfigSection;
