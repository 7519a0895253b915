pub mod config;
pub mod engines;
pub mod error;
pub mod runner;
pub mod types;

pub use config::{AppConfig, ConfigManager, EvolutionConfig};
pub use engines::evaluation::{FitnessOracle, LengthPenaltyOracle, RemoteFitnessOracle};
pub use engines::generation::{EvolutionEngine, Individual, ProgressCallback, RunOutcome};
pub use error::{EvomovesError, Result};
pub use types::Move;
