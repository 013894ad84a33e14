//! Simulator owning the current generation

use super::io::{self, decode_state, encode_state};
use super::{GameOfLifeRules, Grid};
use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info, warn};

/// Owns the current generation and drives it forward.
///
/// Every operation either fully succeeds or leaves the simulator untouched;
/// no partially computed generation is ever observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    grid: Grid,
    generation: u64,
}

impl Simulator {
    /// Create a simulator with an all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }

    /// Start a simulation from an existing board at generation 0
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    /// Build a simulator from a saved board
    pub fn from_saved(data: &str) -> Result<Self> {
        let (grid, generation) = decode_state(data)?;
        Ok(Self { grid, generation })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of generations advanced since construction (or since the loaded save point)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, row: isize, col: isize) -> Result<bool> {
        self.grid.get(row, col)
    }

    pub fn set_cell(&mut self, row: isize, col: isize, alive: bool) -> Result<()> {
        self.grid.set(row, col, alive)
    }

    /// Flip a cell and return its new state. Pause gating is left to the caller.
    pub fn toggle_cell(&mut self, row: isize, col: isize) -> Result<bool> {
        self.grid.toggle(row, col)
    }

    pub fn count_live_neighbors(&self, row: isize, col: isize) -> Result<u8> {
        self.grid.count_live_neighbors(row, col)
    }

    /// Kill every cell; the generation counter is kept
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Replace the current grid with the next generation
    pub fn advance(&mut self) {
        self.grid = GameOfLifeRules::evolve(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            living = self.grid.living_count(),
            "Advanced generation"
        );
    }

    /// Advance `generations` times
    pub fn advance_by(&mut self, generations: usize) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Serialize the board and generation counter
    pub fn save(&self) -> String {
        encode_state(&self.grid, self.generation)
    }

    /// Replace the board with a saved one; on error the current board is kept
    pub fn load(&mut self, data: &str) -> Result<()> {
        match decode_state(data) {
            Ok((grid, generation)) => {
                debug!(
                    width = grid.width(),
                    height = grid.height(),
                    generation,
                    "Loaded board"
                );
                self.grid = grid;
                self.generation = generation;
                Ok(())
            }
            Err(e) => {
                warn!("Rejected board data: {}", e);
                Err(e)
            }
        }
    }

    /// Save the board to a file, creating parent directories as needed
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        io::write_file(&path, &self.save())?;
        info!(
            path = %path.as_ref().display(),
            generation = self.generation,
            "Saved board"
        );
        Ok(())
    }

    /// Load a board from a file; on error the current board is kept
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file: {}", path.display()))?;

        self.load(&content)
            .with_context(|| format!("Failed to load board from file: {}", path.display()))?;
        info!(path = %path.display(), generation = self.generation, "Loaded board file");
        Ok(())
    }
}
