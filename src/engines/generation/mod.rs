pub mod crossover;
pub mod evolution_engine;
pub mod genome;
pub mod hall_of_fame;
pub mod individual;
pub mod operators;
pub mod population;
pub mod progress;
pub mod selection;

pub use crossover::crossover;
pub use evolution_engine::{EvolutionEngine, ProgressCallback, RunOutcome};
pub use genome::Genome;
pub use hall_of_fame::Winners;
pub use individual::Individual;
pub use operators::{mutate, MutationKind, MutationRates};
pub use population::{GenomeLength, Population};
pub use progress::{
    ChannelProgressCallback, LogProgressCallback, ProgressMessage, SilentProgressCallback,
};
pub use selection::select;
