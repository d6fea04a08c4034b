use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuadtreeError {
    #[error("min_cell_size must be positive (min_cell_size: {min_cell_size})")]
    InvalidMinCellSize { min_cell_size: i32 },

    #[error("max_in_cell must be at least 1")]
    InvalidMaxInCell,

    #[error(
        "min_in_4_cells must be lower than max_in_cell (min_in_4_cells: {min_in_4_cells}, max_in_cell: {max_in_cell})"
    )]
    InvalidMergeThreshold {
        min_in_4_cells: u32,
        max_in_cell: u32,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
