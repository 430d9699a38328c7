use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid dimensions must be positive, got {columns} columns x {rows} rows")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("cells {a:?} and {b:?} are not orthogonal neighbors")]
    NotAdjacent { a: (usize, usize), b: (usize, usize) },

    #[error("cell index {index} is outside a grid of {len} cells")]
    OutOfBounds { index: usize, len: usize },
}
