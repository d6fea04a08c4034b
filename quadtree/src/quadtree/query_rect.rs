use super::*;

impl<T, S> Quadtree<T, S> {
    /// Calls `f` once for every element whose bounding box overlaps `area`.
    pub fn for_each_element_in<F>(&self, area: Rectangle, mut f: F)
    where
        F: FnMut(&T),
    {
        if area.is_empty() || self.root.count == 0 {
            return;
        }
        let margin = self.max_extent;
        let mut stack = NodeStack::new();
        stack.push((NodeId::Root, self.root_axis()));
        while let Some((id, axis)) = stack.pop() {
            let node = self.node(id);
            if node.count == 0 || !axis.reaches(&area, margin) {
                continue;
            }
            if node.is_leaf {
                let mut current = node.first_child;
                while current != NIL {
                    let element_node = &self.element_nodes[current];
                    if element_node.bbox.overlaps(&area) {
                        f(&element_node.element);
                    }
                    current = element_node.next;
                }
            } else {
                for quadrant in 0..4 {
                    stack.push((node.child(quadrant), axis.child(quadrant)));
                }
            }
        }
    }

    /// Appends the elements overlapping `area` to `out`, so per-frame
    /// callers can reuse one buffer.
    pub fn raw_get_elements<E>(&self, area: Rectangle, out: &mut E)
    where
        T: Clone,
        E: Extend<T>,
    {
        self.for_each_element_in(area, |element| out.extend(Some(element.clone())));
    }

    pub fn get_elements(&self, area: Rectangle) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::new();
        self.raw_get_elements(area, &mut elements);
        elements
    }

    /// Every stored element with its bounding box, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, Rectangle)> + '_ {
        self.element_nodes
            .iter()
            .map(|(_, element_node)| (&element_node.element, element_node.bbox))
    }
}
