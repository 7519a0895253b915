//! Drivers that turn configuration files into engine runs.
//!
//! [`run_config_file`] runs a single configuration against the scoring
//! service. [`BatchRunner`] runs every configuration found in a directory and
//! writes one result line per file to a log.

use crate::config::{load_app_config, AppConfig};
use crate::engines::evaluation::{FitnessOracle, LengthPenaltyOracle, RemoteFitnessOracle};
use crate::engines::generation::{
    EvolutionEngine, LogProgressCallback, ProgressCallback, SilentProgressCallback,
};
use crate::error::Result;
use rayon::prelude::*;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions the batch runner treats as configuration files
pub const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Builds the oracle a run scores against
pub type OracleFactory = dyn Fn(&AppConfig) -> Result<Box<dyn FitnessOracle>> + Send + Sync;

/// Summary of one finished run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub winners: Vec<String>,
    pub generations_run: usize,
    pub best_fitness: f64,
}

/// The scoring service from `config.oracle`, wrapped in the length penalty
pub fn remote_oracle(config: &AppConfig) -> Result<Box<dyn FitnessOracle>> {
    let remote = RemoteFitnessOracle::from_config(&config.oracle)?;
    Ok(Box::new(LengthPenaltyOracle::new(remote, config.penalty.clone())))
}

/// Run one engine over an already loaded configuration
pub fn run_config<O, C>(config: &AppConfig, oracle: O, callback: C) -> Result<RunReport>
where
    O: FitnessOracle,
    C: ProgressCallback,
{
    let mut engine = EvolutionEngine::from_app_config(config, oracle)?;
    let outcome = engine.run(callback)?;

    Ok(RunReport {
        winners: outcome.winners,
        generations_run: outcome.generations_run,
        best_fitness: engine.best_fitness_overall(),
    })
}

/// Load, validate and run a configuration file against the remote oracle
pub fn run_config_file<P: AsRef<Path>>(path: P) -> Result<RunReport> {
    let config = load_app_config(path.as_ref())?;
    let oracle = remote_oracle(&config)?;
    run_config(&config, oracle, LogProgressCallback)
}

/// Result of one configuration file in a batch
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub name: String,
    pub outcome: std::result::Result<RunReport, String>,
}

impl BatchEntry {
    pub fn log_line(&self) -> String {
        match &self.outcome {
            Ok(report) => format!(
                "[{}] Fitness={:.6}  Genomes={}  Generations={}",
                self.name,
                report.best_fitness,
                report.winners.first().map(String::as_str).unwrap_or("-"),
                report.generations_run
            ),
            Err(message) => format!("[{}] FAILED: {}", self.name, message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub struct BatchRunner {
    oracle_factory: Box<OracleFactory>,
    parallel: bool,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchRunner {
    /// Batch runner scoring against the remote oracle of each configuration
    pub fn new() -> Self {
        Self::with_oracle_factory(remote_oracle)
    }

    pub fn with_oracle_factory<F>(factory: F) -> Self
    where
        F: Fn(&AppConfig) -> Result<Box<dyn FitnessOracle>> + Send + Sync + 'static,
    {
        Self {
            oracle_factory: Box::new(factory),
            parallel: false,
        }
    }

    /// Run configurations on the rayon pool. Entries stay in file order.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Configuration files directly inside `dir`, sorted by path
    pub fn discover_configs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut configs = Vec::new();
        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            let is_config = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| CONFIG_EXTENSIONS.contains(&ext))
                .unwrap_or(false);
            if path.is_file() && is_config {
                configs.push(path);
            }
        }
        configs.sort();
        Ok(configs)
    }

    pub fn run_files(&self, files: &[PathBuf]) -> Vec<BatchEntry> {
        if self.parallel {
            files.par_iter().map(|path| self.run_one(path)).collect()
        } else {
            files.iter().map(|path| self.run_one(path)).collect()
        }
    }

    fn run_one(&self, path: &Path) -> BatchEntry {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let outcome = load_app_config(path)
            .and_then(|config| {
                let oracle = (self.oracle_factory)(&config)?;
                run_config(&config, oracle, SilentProgressCallback)
            })
            .map_err(|e| e.to_string());

        let entry = BatchEntry { name, outcome };
        match &entry.outcome {
            Ok(_) => log::info!("{}", entry.log_line()),
            Err(_) => log::warn!("{}", entry.log_line()),
        }
        entry
    }

    /// Run every configuration in `dir` and write the results log.
    ///
    /// A failing configuration produces a `FAILED` line and never stops the
    /// batch. Only directory and log I/O errors are returned.
    pub fn run_dir<P: AsRef<Path>, L: AsRef<Path>>(
        &self,
        dir: P,
        log_path: L,
    ) -> Result<Vec<BatchEntry>> {
        let dir = dir.as_ref();
        let configs = Self::discover_configs(dir)?;

        let mut report = String::new();
        let _ = writeln!(report, "===== Evolution Batch =====");
        let _ = writeln!(report, "Started at: {}", chrono::Local::now().to_rfc3339());
        let _ = writeln!(report);

        if configs.is_empty() {
            let _ = writeln!(report, "No config files found in {}", dir.display());
            fs::write(log_path.as_ref(), report)?;
            return Ok(Vec::new());
        }

        let entries = self.run_files(&configs);
        for entry in &entries {
            let _ = writeln!(report, "{}", entry.log_line());
        }

        let succeeded = entries.iter().filter(|e| e.is_success()).count();
        let _ = writeln!(report);
        let _ = writeln!(report, "{} of {} configurations completed", succeeded, entries.len());
        let _ = writeln!(report, "===== End of Batch =====");

        fs::write(log_path.as_ref(), report)?;

        Ok(entries)
    }
}
