use super::evolution_engine::ProgressCallback;
use std::sync::mpsc::Sender;

/// Reports progress through the `log` facade
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting", generation);
    }

    fn on_generation_complete(
        &mut self,
        generation: usize,
        best_fitness: f64,
        best_fitness_overall: f64,
        winners: usize,
    ) {
        log::info!("Best fitness for generation {} = {}", generation, best_fitness);
        log::info!("Best fitness overall = {} ({} winners)", best_fitness_overall, winners);
    }

    fn on_winner_found(&mut self, generation: usize, genome: &str, total: usize) {
        if total == 1 {
            log::info!("Solution found in {} generations", generation);
        }
        log::info!("Winner #{}: {}", total, genome);
    }
}

/// Discards every event
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _: usize, _: f64, _: f64, _: usize) {}
}

// For consumers on another thread
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete {
        generation: usize,
        best_fitness: f64,
        best_fitness_overall: f64,
        winners: usize,
    },
    WinnerFound {
        generation: usize,
        genome: String,
        total: usize,
    },
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(
        &mut self,
        generation: usize,
        best_fitness: f64,
        best_fitness_overall: f64,
        winners: usize,
    ) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_fitness,
            best_fitness_overall,
            winners,
        });
    }

    fn on_winner_found(&mut self, generation: usize, genome: &str, total: usize) {
        let _ = self.sender.send(ProgressMessage::WinnerFound {
            generation,
            genome: genome.to_string(),
            total,
        });
    }
}
