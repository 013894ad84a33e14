//! Board persistence and plain-text pattern files
//!
//! Saved boards are JSON documents:
//!
//! ```json
//! {
//!   "width": 3,
//!   "height": 2,
//!   "generation": 0,
//!   "board": [[0, 1, 0], [1, 1, 1]]
//! }
//! ```
//!
//! Patterns are plain text, one line per row, `1` for alive and `0` for dead.

use super::Grid;
use crate::error::{LifeError, Result};
use anyhow::Context;
use serde::Deserialize;
use serde_json::json;
use std::path::Path;

/// Default extension for saved boards ("Game of Life State")
pub const STATE_FILE_EXTENSION: &str = "gols";

/// Extension of plain-text pattern files
pub const PATTERN_FILE_EXTENSION: &str = "txt";

#[derive(Debug, Deserialize)]
struct BoardState {
    width: i64,
    height: i64,
    #[serde(default)]
    generation: u64,
    board: Vec<Vec<u8>>,
}

/// Encode a board and its generation counter as a JSON document
pub fn encode_state(grid: &Grid, generation: u64) -> String {
    let board: Vec<Vec<u8>> = grid
        .rows()
        .into_iter()
        .map(|row| row.into_iter().map(u8::from).collect())
        .collect();

    let document = json!({
        "width": grid.width(),
        "height": grid.height(),
        "generation": generation,
        "board": board,
    });
    format!("{:#}\n", document)
}

/// Decode a JSON board document, checking the matrix against the declared dimensions
pub fn decode_state(data: &str) -> Result<(Grid, u64)> {
    let state: BoardState = serde_json::from_str(data)?;

    let positive = |value: i64| usize::try_from(value).ok().filter(|&v| v > 0);
    let (width, height) = match (positive(state.width), positive(state.height)) {
        (Some(width), Some(height)) => (width, height),
        _ => {
            return Err(LifeError::CorruptData(format!(
                "declared dimensions {}x{} must be positive",
                state.width, state.height
            )))
        }
    };

    if state.board.len() != height {
        return Err(LifeError::CorruptData(format!(
            "declared height {} but found {} rows",
            height,
            state.board.len()
        )));
    }

    // Row lengths are checked before anything is sized from the declared width
    if let Some((row_idx, row)) = state.board.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(LifeError::CorruptData(format!(
            "row {} has {} cells, declared width is {}",
            row_idx,
            row.len(),
            width
        )));
    }

    let mut cells = Vec::with_capacity(state.board.iter().map(Vec::len).sum());
    for (row_idx, row) in state.board.iter().enumerate() {
        for (col_idx, &value) in row.iter().enumerate() {
            match value {
                0 => cells.push(false),
                1 => cells.push(true),
                _ => {
                    return Err(LifeError::CorruptData(format!(
                        "invalid cell value {} at ({}, {}), expected 0 or 1",
                        value, row_idx, col_idx
                    )))
                }
            }
        }
    }

    Ok((Grid::from_raw(width, height, cells), state.generation))
}

/// Parse a grid from its plain-text pattern representation
pub fn parse_pattern(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut rows = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(LifeError::CorruptData(format!(
                    "invalid character '{}' at position ({}, {}), only '0' and '1' are allowed",
                    ch, row_idx, col_idx
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        rows.push(row);
    }

    Grid::from_rows(rows)
}

/// Convert a grid to its plain-text pattern representation
pub fn pattern_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));

    for row in grid.rows() {
        result.extend(row.into_iter().map(|cell| if cell { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Whether a path names a plain-text pattern rather than a saved board
pub fn is_pattern_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext == PATTERN_FILE_EXTENSION)
}

/// Load a pattern grid from a text file
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Save a grid as a plain-text pattern file
pub fn save_pattern_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> anyhow::Result<()> {
    write_file(path, &pattern_to_string(grid))
}

/// Write a file, creating parent directories if they don't exist
pub(crate) fn write_file<P: AsRef<Path>>(path: P, content: &str) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> anyhow::Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        ("glider", "00100\n10100\n01100\n00000\n00000\n"),
        ("blinker", "000\n111\n000\n"),
        ("block", "0000\n0110\n0110\n0000\n"),
        ("beacon", "110000\n110000\n001100\n001100\n"),
    ];

    for (name, content) in patterns {
        let path = dir.join(format!("{}.{}", name, PATTERN_FILE_EXTENSION));
        write_file(&path, content)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern() {
        let grid = parse_pattern("010\n101\n010\n").unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.living_cells(), vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_pattern_to_string() {
        let grid = Grid::from_rows(vec![
            vec![false, true, false],
            vec![true, false, true],
        ])
        .unwrap();

        assert_eq!(pattern_to_string(&grid), "010\n101\n");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            parse_pattern("010\n1X1\n010\n"),
            Err(LifeError::CorruptData(_))
        ));
        assert!(matches!(
            parse_pattern("010\n11\n010\n"),
            Err(LifeError::CorruptData(_))
        ));
        assert!(matches!(
            parse_pattern("\n\n"),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_state_layout() {
        let grid = parse_pattern("01\n10\n11\n").unwrap();
        let encoded = encode_state(&grid, 7);

        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["width"], 2);
        assert_eq!(value["height"], 3);
        assert_eq!(value["generation"], 7);
        assert_eq!(value["board"], json!([[0, 1], [1, 0], [1, 1]]));

        let width_pos = encoded.find("\"width\"").unwrap();
        let height_pos = encoded.find("\"height\"").unwrap();
        let board_pos = encoded.find("\"board\"").unwrap();
        assert!(width_pos < height_pos && height_pos < board_pos);
    }

    #[test]
    fn test_decode_state() {
        let data = r#"{"width": 3, "height": 2, "board": [[0, 1, 0], [1, 1, 1]]}"#;
        let (grid, generation) = decode_state(data).unwrap();

        assert_eq!(generation, 0);
        assert_eq!(grid, parse_pattern("010\n111\n").unwrap());
    }

    #[test]
    fn test_decode_rejects_corrupt_data() {
        let cases = [
            "not json at all",
            r#"{"width": 2, "height": 1}"#,
            r#"{"width": 0, "height": 1, "board": [[]]}"#,
            r#"{"width": 2, "height": -1, "board": []}"#,
            r#"{"width": 3, "height": 3, "board": [[0, 0, 0], [1, 1, 1]]}"#,
            r#"{"width": 3, "height": 2, "board": [[0, 0, 0], [1, 1]]}"#,
            r#"{"width": 2, "height": 1, "board": [[0, 2]]}"#,
            r#"{"width": 2, "height": 1, "board": [[0, true]]}"#,
            r#"{"width": 9223372036854775807, "height": 1, "board": [[0]]}"#,
            r#"{"width": 9223372036854775807, "height": 2, "board": [[0], [1]]}"#,
            r#"{"width": 9223372036854775807, "height": 3, "board": [[0], [1], [0]]}"#,
            r#"{"width": 4, "height": 9223372036854775807, "board": [[0, 0, 0, 0]]}"#,
        ];

        for data in cases {
            assert!(
                matches!(decode_state(data), Err(LifeError::CorruptData(_))),
                "accepted corrupt data: {}",
                data
            );
        }
    }

    #[test]
    fn test_pattern_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/test_grid.txt");

        let original = parse_pattern("101\n010\n").unwrap();
        save_pattern_to_file(&original, &file_path).unwrap();
        let loaded = load_pattern_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
        assert!(is_pattern_file(&file_path));
        assert!(!is_pattern_file(temp_dir.path().join("board.gols")));
    }

    #[test]
    fn test_missing_pattern_file() {
        let temp_dir = tempdir().unwrap();
        let err = load_pattern_from_file(temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["glider", "blinker", "block", "beacon"] {
            assert!(temp_dir.path().join(format!("{}.txt", name)).exists());
        }

        let glider = load_pattern_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.width(), 5);
        assert_eq!(glider.height(), 5);
        assert_eq!(glider.living_count(), 5);
    }
}
