//! Game of Life transition rule and generation step

use super::Grid;
use rayon::prelude::*;

/// Game of Life rules engine (B3/S23)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation into a fresh grid.
    ///
    /// Every cell's next state is derived from `current` alone, so the rule
    /// applies to all cells simultaneously. Rows are evaluated in parallel;
    /// workers only read the frozen current generation.
    pub fn evolve(current: &Grid) -> Grid {
        let width = current.width();
        let next_cells: Vec<bool> = (0..current.height())
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..width).map(move |col| {
                    Self::should_be_alive(current.alive_at(row, col), current.neighbors_at(row, col))
                })
            })
            .collect();

        Grid::from_raw(width, current.height(), next_cells)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Next state of a cell given its current state and live neighbour count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::io::parse_pattern;

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 0));
        for count in 0..=8 {
            assert_eq!(GameOfLifeRules::should_be_alive(false, count), count == 3);
        }
    }

    #[test]
    fn test_still_life_block() {
        let grid = parse_pattern("00000\n01100\n01100\n00000\n00000\n").unwrap();
        let evolved = GameOfLifeRules::evolve_generations(grid.clone(), 10);
        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let grid = parse_pattern("000\n111\n000\n").unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);
        assert_eq!(evolved, parse_pattern("010\n010\n010\n").unwrap());

        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(grid, evolved_twice);
    }

    #[test]
    fn test_simultaneous_update() {
        // An in-place scan would see (0,1) already dead when visiting (0,2)
        let grid = parse_pattern("0110\n0110\n0000\n").unwrap();
        assert_eq!(GameOfLifeRules::evolve(&grid), grid);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let glider = parse_pattern(
            "010000\n001000\n111000\n000000\n000000\n000000\n",
        )
        .unwrap();
        let moved = GameOfLifeRules::evolve_generations(glider, 4);
        let expected = parse_pattern(
            "000000\n001000\n000100\n011100\n000000\n000000\n",
        )
        .unwrap();
        assert_eq!(moved, expected);
    }

    #[test]
    fn test_glider_does_not_wrap_at_corner() {
        let glider = parse_pattern("0100\n0010\n1110\n0000\n").unwrap();
        let settled = GameOfLifeRules::evolve_generations(glider, 12);
        // Collides with the closed corner and settles into a block
        assert_eq!(settled, parse_pattern("0000\n0000\n0011\n0011\n").unwrap());
        assert!(settled.living_cells().iter().all(|&(r, c)| r >= 2 && c >= 2));
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let grid = crate::game_of_life::Grid::new(7, 5).unwrap();
        assert!(GameOfLifeRules::evolve(&grid).is_empty());
    }
}
