use crate::error::{QuadtreeError, QuadtreeResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cells are never split into quadrants smaller than this, whatever their
    /// occupancy.
    pub min_cell_size: i32,
    /// A leaf holding more elements than this is split.
    pub max_in_cell: u32,
    /// Four sibling leaves holding this many elements or fewer are merged.
    pub min_in_4_cells: u32,
    /// Element slots reserved up front.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_cell_size: 32,
            max_in_cell: 8,
            min_in_4_cells: 4,
            pool_size: 0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.min_cell_size <= 0 {
            return Err(QuadtreeError::InvalidMinCellSize {
                min_cell_size: self.min_cell_size,
            });
        }
        if self.max_in_cell == 0 {
            return Err(QuadtreeError::InvalidMaxInCell);
        }
        if self.min_in_4_cells >= self.max_in_cell {
            return Err(QuadtreeError::InvalidMergeThreshold {
                min_in_4_cells: self.min_in_4_cells,
                max_in_cell: self.max_in_cell,
            });
        }
        Ok(())
    }
}
