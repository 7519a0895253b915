use evomoves::config::AppConfig;
use evomoves::engines::evaluation::FitnessOracle;
use evomoves::engines::generation::SilentProgressCallback;
use evomoves::runner::{run_config, BatchRunner};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Every genome is scored `self.0`
struct Flat(f64);

impl FitnessOracle for Flat {
    fn evaluate(&self, genomes: &[String]) -> Vec<f64> {
        vec![self.0; genomes.len()]
    }
}

fn config_toml(seed: u64, bit_add_rate: f64) -> String {
    format!(
        r#"
[evolution]
seed = {seed}
min_genome_length = 4
max_genome_length = 4
max_generation = 3
population_size = 8
max_solutions = 2
crossover = "uniform"
crossover_rate = 0.5
leftover = "keep_all_or_nothing_randomly"
mutation_target = "both"
mutation_rate = 0.1
bit_flip_rate = 0.6
bit_add_rate = {bit_add_rate}
bit_remove_rate = 0.2

[evolution.selection]
strategy = "elitism"

[oracle]
acceptance_threshold = 5.0
"#
    )
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn stub_runner(score: f64) -> BatchRunner {
    BatchRunner::with_oracle_factory(move |_config: &AppConfig| {
        Ok(Box::new(Flat(score)) as Box<dyn FitnessOracle>)
    })
}

#[test]
fn test_run_config_with_stub_oracle() {
    let config = AppConfig::default();
    let threshold = config.oracle.acceptance_threshold;

    let report = run_config(&config, Flat(threshold), SilentProgressCallback).unwrap();
    assert_eq!(report.winners.len(), config.evolution.max_solutions);
    assert_eq!(report.generations_run, 0);
    assert_eq!(report.best_fitness, threshold);
}

#[test]
fn test_discover_configs_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b.toml", "");
    write(dir.path(), "a.yaml", "");
    write(dir.path(), "c.json", "");
    write(dir.path(), "notes.txt", "");
    fs::create_dir(dir.path().join("nested.toml")).unwrap();

    let names: Vec<String> = BatchRunner::discover_configs(dir.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.yaml", "b.toml", "c.json"]);
}

#[test]
fn test_batch_writes_results_log() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "config_001.toml", &config_toml(1, 0.2));
    write(dir.path(), "config_002.toml", &config_toml(2, 0.5));
    write(dir.path(), "config_003.toml", &config_toml(3, 0.2));
    let log_path = dir.path().join("results.log");

    let entries = stub_runner(5.0).run_dir(dir.path(), &log_path).unwrap();

    assert_eq!(entries.len(), 3);
    assert!(entries[0].is_success());
    assert!(!entries[1].is_success());
    assert!(entries[2].is_success());

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.starts_with("===== Evolution Batch ====="));
    assert!(log.contains("Started at: "));
    assert!(log.contains("[config_001.toml] Fitness=5.000000  Genomes="));
    assert!(log.contains("Generations=0"));
    assert!(log.contains("[config_002.toml] FAILED: "));
    assert!(log.contains("Sum of bit mutation rates does not equal 1"));
    assert!(log.contains("2 of 3 configurations completed"));
    assert!(log.trim_end().ends_with("===== End of Batch ====="));
}

#[test]
fn test_parallel_batch_keeps_file_order() {
    let dir = TempDir::new().unwrap();
    for i in 0..6 {
        write(dir.path(), &format!("run_{i}.toml"), &config_toml(i, 0.2));
    }
    let log_path = dir.path().join("out.log");

    let sequential = stub_runner(1.0).run_dir(dir.path(), &log_path).unwrap();
    let parallel = stub_runner(1.0).parallel(true).run_dir(dir.path(), &log_path).unwrap();

    let names = |entries: &[evomoves::runner::BatchEntry]| -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    };
    assert_eq!(names(sequential.as_slice()), names(parallel.as_slice()));
    for (a, b) in sequential.iter().zip(&parallel) {
        assert_eq!(a.log_line(), b.log_line());
    }
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    let configs = dir.path().join("configs");
    fs::create_dir(&configs).unwrap();
    let log_path = dir.path().join("results.log");

    let entries = stub_runner(0.0).run_dir(&configs, &log_path).unwrap();

    assert!(entries.is_empty());
    assert!(fs::read_to_string(&log_path).unwrap().contains("No config files found"));
}

#[test]
fn test_oracle_factory_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "only.toml", &config_toml(1, 0.2));

    let runner = BatchRunner::with_oracle_factory(|_config: &AppConfig| {
        Err(evomoves::EvomovesError::Oracle("service offline".to_string()))
    });
    let entries = runner.run_dir(dir.path(), dir.path().join("results.log")).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].log_line(), "[only.toml] FAILED: Oracle error: service offline");
}
