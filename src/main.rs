#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use evomoves::config::ConfigManager;
use evomoves::runner::{self, BatchRunner};
use std::path::PathBuf;
use std::process::ExitCode;

/// Evolve move sequences against an external fitness service
#[derive(Parser, Debug)]
#[command(name = "evomoves")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the genetic algorithm for one configuration file
    Run {
        /// Configuration file (toml, yaml or json)
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Run every configuration file in a directory
    Batch {
        /// Directory holding the configuration files
        #[arg(short, long)]
        dir: PathBuf,

        /// Results log to write
        #[arg(short, long, default_value = "results.log")]
        log: PathBuf,

        /// Run configurations in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Write the default configuration
    Init {
        /// Output file
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Commands::Run { config } => run(config),
        Commands::Batch { dir, log, parallel } => batch(dir, log, parallel),
        Commands::Init { output } => init(output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: PathBuf) -> anyhow::Result<()> {
    let report = runner::run_config_file(&config)
        .with_context(|| format!("running {}", config.display()))?;

    let mut winners = report.winners;
    winners.sort_by_key(|w| w.len());

    let quoted: Vec<String> = winners.iter().map(|w| format!("\"{}\"", w)).collect();
    println!("{}", quoted.join(" "));

    match winners.first() {
        Some(shortest) => println!(
            "Found {} solutions, shortest one is {}",
            winners.len(),
            shortest
        ),
        None => println!("No solutions found"),
    }
    Ok(())
}

fn batch(dir: PathBuf, log: PathBuf, parallel: bool) -> anyhow::Result<()> {
    let entries = BatchRunner::new()
        .parallel(parallel)
        .run_dir(&dir, &log)
        .with_context(|| format!("running batch in {}", dir.display()))?;

    for entry in &entries {
        if entry.is_success() {
            println!("{}", entry.log_line());
        } else {
            eprintln!("{}", entry.log_line());
        }
    }
    println!("\nResults written to {}", log.display());
    Ok(())
}

fn init(output: PathBuf) -> anyhow::Result<()> {
    ConfigManager::new()
        .save_to_file(&output)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Default configuration written to {}", output.display());
    Ok(())
}
