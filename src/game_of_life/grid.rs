//! Grid representation and neighbour counting for Game of Life

use crate::error::{LifeError, Result};
use itertools::iproduct;
use std::fmt;

/// A fixed-size board of alive/dead cells with a closed boundary.
///
/// Positions outside `[0, height) x [0, width)` are permanently dead: they
/// never wrap around and never contribute to a neighbour count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid.
    ///
    /// Fails with `InvalidDimensions` when a side is zero or the board cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = LifeError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }

        let len = width.checked_mul(height).ok_or_else(|| invalid.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, false);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid from a 2D boolean array, one inner vector per row
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::CorruptData(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Assemble a grid from an already validated row-major buffer.
    pub(crate) fn from_raw(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major buffer index, or `None` when the coordinates fall outside the grid
    #[inline]
    fn checked_index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    fn index(&self, row: isize, col: isize) -> Result<usize> {
        self.checked_index(row, col).ok_or(LifeError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        })
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: isize, col: isize) -> Result<bool> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: isize, col: isize, alive: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip a cell and return its new state
    pub fn toggle(&mut self, row: isize, col: isize) -> Result<bool> {
        let idx = self.index(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Count living cells in the Moore neighbourhood of an in-range cell
    pub fn count_live_neighbors(&self, row: isize, col: isize) -> Result<u8> {
        self.index(row, col)?;
        Ok(self.neighbors_at(row as usize, col as usize))
    }

    /// Unchecked-centre neighbour count used by the generation step.
    /// The centre must be inside the grid; neighbours outside it count as dead.
    pub(crate) fn neighbors_at(&self, row: usize, col: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter_map(|(dr, dc)| self.checked_index(row as isize + dr, col as isize + dc))
            .filter(|&idx| self.cells[idx])
            .count() as u8
    }

    #[inline]
    pub(crate) fn alive_at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Snapshot of the cells, one vector per row
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.width).map(<[bool]>::to_vec).collect()
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| (idx / self.width, idx % self.width))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
