pub mod oracle;
pub mod penalty;
pub mod remote;

pub use oracle::FitnessOracle;
pub use penalty::LengthPenaltyOracle;
pub use remote::RemoteFitnessOracle;
