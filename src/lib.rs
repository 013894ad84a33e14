//! Conway's Game of Life simulation core
//!
//! A [`Simulator`] owns a fixed-size [`Grid`] with a closed boundary, advances
//! it one generation at a time and saves/loads the board as JSON. Front ends
//! decide when to advance; this crate decides what the next generation is.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod telemetry;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, Result};
pub use game_of_life::{GameOfLifeRules, Grid, Simulator};

use anyhow::Context;
use tracing::info;

/// Build the starting simulator described by the settings.
///
/// A `.txt` pattern input sets the board size from the pattern itself; a saved
/// board keeps its own size and generation; without input an empty board of
/// the configured size is used.
pub fn build_simulator(settings: &Settings) -> anyhow::Result<Simulator> {
    match settings.input.initial_state {
        Some(ref path) if game_of_life::io::is_pattern_file(path) => {
            let grid = game_of_life::load_pattern_from_file(path)?;
            info!(path = %path.display(), "Seeded board from pattern");
            Ok(Simulator::from_grid(grid))
        }
        Some(ref path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read board file: {}", path.display()))?;
            let sim = Simulator::from_saved(&content)
                .with_context(|| format!("Failed to load board from file: {}", path.display()))?;
            info!(path = %path.display(), generation = sim.generation(), "Resumed saved board");
            Ok(sim)
        }
        None => Simulator::new(settings.simulation.width, settings.simulation.height)
            .context("Failed to create board"),
    }
}
