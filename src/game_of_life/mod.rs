//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod rules;
pub mod simulator;

pub use grid::Grid;
pub use io::{create_example_patterns, load_pattern_from_file, parse_pattern, save_pattern_to_file};
pub use rules::GameOfLifeRules;
pub use simulator::Simulator;
