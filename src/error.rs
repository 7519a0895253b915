use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvomovesError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{strategy} selection cannot pick {requested} from a pool of {available}")]
    Sizing {
        strategy: &'static str,
        requested: usize,
        available: usize,
    },

    #[error("tournament size {size} does not fit a selection pool of {available}")]
    TournamentSize { size: usize, available: usize },

    #[error("Oracle error: {0}")]
    Oracle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvomovesError>;
