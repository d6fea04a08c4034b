use super::*;

/// Geometry of one cell, recomputed while descending instead of being stored
/// per node.
///
/// `edges` records which sides of the cell lie on the border of the tree
/// space. Queries treat those sides as unbounded so elements filed there from
/// outside the space are still found.
#[derive(Clone, Copy, Debug)]
pub(crate) struct QuadAxis {
    pub(crate) cell: Rectangle,
    pub(crate) center: Point,
    pub(crate) edges: u8,
    pub(crate) depth: u32,
}

impl QuadAxis {
    pub(crate) fn root(space: Rectangle) -> Self {
        Self {
            cell: space,
            center: space.center(),
            edges: EDGE_ALL,
            depth: 0,
        }
    }

    /// Quadrant holding `point`. Points outside the cell go to the nearest
    /// quadrant, which amounts to clamping them into the cell first.
    #[inline(always)]
    pub(crate) fn quadrant_of(&self, point: Point) -> usize {
        let mut quadrant = 0;
        if point.x >= self.center.x {
            quadrant |= QUADRANT_RIGHT;
        }
        if point.y >= self.center.y {
            quadrant |= QUADRANT_BOTTOM;
        }
        quadrant
    }

    #[inline(always)]
    pub(crate) fn child(&self, quadrant: usize) -> Self {
        let cell = self.cell;
        let left_width = self.center.x - cell.x;
        let top_height = self.center.y - cell.y;
        let (x, width, mut edges) = if quadrant & QUADRANT_RIGHT == 0 {
            (cell.x, left_width, self.edges & !EDGE_RIGHT)
        } else {
            (self.center.x, cell.width - left_width, self.edges & !EDGE_LEFT)
        };
        let (y, height) = if quadrant & QUADRANT_BOTTOM == 0 {
            edges &= !EDGE_BOTTOM;
            (cell.y, top_height)
        } else {
            edges &= !EDGE_TOP;
            (self.center.y, cell.height - top_height)
        };
        let cell = Rectangle::new(x, y, width, height);
        Self {
            cell,
            center: cell.center(),
            edges,
            depth: self.depth + 1,
        }
    }

    /// Whether splitting keeps every quadrant at least `min_cell_size` wide
    /// and high.
    #[inline(always)]
    pub(crate) fn can_split(&self, min_cell_size: i32) -> bool {
        self.cell.width / 2 >= min_cell_size && self.cell.height / 2 >= min_cell_size
    }

    /// Whether an element stored in this cell may overlap `area`, given that
    /// no stored box is larger than `margin`.
    #[inline(always)]
    pub(crate) fn reaches(&self, area: &Rectangle, margin: Size) -> bool {
        let cell = self.cell;
        let left = if self.edges & EDGE_LEFT != 0 {
            i64::MIN
        } else {
            cell.x as i64 - margin.width as i64
        };
        let top = if self.edges & EDGE_TOP != 0 {
            i64::MIN
        } else {
            cell.y as i64 - margin.height as i64
        };
        let right = if self.edges & EDGE_RIGHT != 0 {
            i64::MAX
        } else {
            cell.x as i64 + cell.width as i64 + margin.width as i64
        };
        let bottom = if self.edges & EDGE_BOTTOM != 0 {
            i64::MAX
        } else {
            cell.y as i64 + cell.height as i64 + margin.height as i64
        };
        let area_left = area.x as i64;
        let area_top = area.y as i64;
        area_left < right
            && left < area_left + area.width as i64
            && area_top < bottom
            && top < area_top + area.height as i64
    }
}
