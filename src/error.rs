//! Error types for the simulation core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("Invalid grid dimensions {width}x{height}: both must be positive and the board must fit in memory")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Coordinates ({row}, {col}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        width: usize,
        height: usize,
    },

    #[error("Corrupt board data: {0}")]
    CorruptData(String),
}

impl From<serde_json::Error> for LifeError {
    fn from(err: serde_json::Error) -> Self {
        LifeError::CorruptData(err.to_string())
    }
}
