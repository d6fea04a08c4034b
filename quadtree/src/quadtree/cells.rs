use super::*;

/// Receives the cells of a tree for debug drawing.
pub trait CellPainter {
    fn draw_cell(&mut self, cell: Rectangle, depth: u32, is_leaf: bool, num_elements: usize);
}

impl<T, S> Quadtree<T, S> {
    /// Hands every cell, offset by `position`, to `painter`. Parents come
    /// before their children.
    pub fn draw<P>(&self, painter: &mut P, position: Point)
    where
        P: CellPainter + ?Sized,
    {
        self.walk_cells(|axis, node| {
            painter.draw_cell(
                axis.cell.translated(position.x, position.y),
                axis.depth,
                node.is_leaf,
                node.count as usize,
            )
        });
    }

    pub fn all_cell_bounds(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.walk_cells(|axis, _| bounding_boxes.push(axis.cell));
    }

    fn walk_cells<F>(&self, mut f: F)
    where
        F: FnMut(&QuadAxis, &Node),
    {
        let mut stack = NodeStack::new();
        stack.push((NodeId::Root, self.root_axis()));
        while let Some((id, axis)) = stack.pop() {
            let node = self.node(id);
            f(&axis, node);
            if !node.is_leaf {
                for quadrant in (0..4).rev() {
                    stack.push((node.child(quadrant), axis.child(quadrant)));
                }
            }
        }
    }
}
