//! Display and output formatting utilities

use crate::game_of_life::{Grid, Simulator};
use itertools::Itertools;

/// Text renderings of boards for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = grid
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(|cell| if cell { '█' } else { '·' }).collect::<String>())
            .join("\n");
        output.push('\n');
        output
    }

    /// Format a grid with row and column coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (y, row) in grid.rows().into_iter().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in row {
                output.push_str(if cell { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Summary statistics for a simulator's current board
    pub fn format_statistics(sim: &Simulator) -> String {
        let grid = sim.grid();
        let total = grid.width() * grid.height();
        let living = grid.living_count();

        format!(
            "Board: {}x{}\nGeneration: {}\nLiving cells: {}\nDensity: {:.1}%\n",
            grid.width(),
            grid.height(),
            sim.generation(),
            living,
            living as f64 / total as f64 * 100.0
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::parse_pattern;

    #[test]
    fn test_grid_formatting() {
        let grid = parse_pattern("101\n010\n").unwrap();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "█·█\n·█·\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_statistics() {
        let sim = Simulator::from_grid(parse_pattern("1100\n0000\n").unwrap());
        let stats = GridFormatter::format_statistics(&sim);

        assert!(stats.contains("Board: 4x2"));
        assert!(stats.contains("Generation: 0"));
        assert!(stats.contains("Living cells: 2"));
        assert!(stats.contains("Density: 25.0%"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
        assert!(ColorOutput::warning("careful").contains("careful"));
        assert!(ColorOutput::error("failed").contains("failed"));
    }
}
