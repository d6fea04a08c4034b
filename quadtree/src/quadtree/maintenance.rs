use super::*;

impl<T, S> Quadtree<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Gives `element` a new bounding box.
    ///
    /// Returns `false` if `element` is not in the tree. Observably the same
    /// as `remove` followed by `add`, but the element keeps its storage slot
    /// and nothing is relinked while its center stays in the same leaf.
    pub fn relocate(&mut self, element: &T, bbox: Rectangle) -> bool {
        let index = match self.elements_infos.get(element) {
            Some(&index) => index,
            None => return false,
        };
        self.grow_extent(bbox);
        let old_center = self.element_nodes[index].bbox.center();
        let new_center = bbox.center();
        if self.find_leaf(old_center) == self.find_leaf(new_center) {
            self.element_nodes[index].bbox = bbox;
            return true;
        }
        self.detach_element(index);
        self.element_nodes[index].bbox = bbox;
        self.insert_element(index, new_center);
        true
    }

    /// Compacts node and element storage, then tightens the query margin to
    /// the largest box still stored.
    pub fn shrink_to_fit(&mut self) {
        let before = self.storage_stats();
        self.rebuild_storage();
        self.elements_infos.shrink_to_fit();
        self.max_extent = self
            .element_nodes
            .iter()
            .fold(Size::default(), |extent, (_, element)| {
                Size::new(
                    extent.width.max(element.bbox.width),
                    extent.height.max(element.bbox.height),
                )
            });
        debug!(
            node_group_range = before.node_group_range,
            node_groups = self.nodes.len(),
            element_range = before.element_range,
            element_nodes = self.element_nodes.len(),
            "shrank quadtree storage"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crowded_tree() -> Quadtree<u32> {
        let mut qt = Quadtree::new(Rectangle::new(0, 0, 256, 256));
        for i in 0..9 {
            qt.add(i, Rectangle::new(8, 8, 4, 4));
        }
        qt
    }

    #[test]
    fn relocate_within_leaf_keeps_storage() {
        let mut qt = crowded_tree();
        let before = qt.storage_stats();
        let index = qt.elements_infos[&3];
        assert!(qt.relocate(&3, Rectangle::new(20, 30, 6, 6)));
        assert_eq!(qt.storage_stats(), before);
        assert_eq!(qt.elements_infos[&3], index);
        assert_eq!(qt.get_bounding_box(&3), Some(Rectangle::new(20, 30, 6, 6)));
        qt.check_invariants();
    }

    #[test]
    fn relocate_across_leaves_reuses_slot() {
        let mut qt = crowded_tree();
        let index = qt.elements_infos[&3];
        assert!(qt.relocate(&3, Rectangle::new(200, 200, 4, 4)));
        assert_eq!(qt.elements_infos[&3], index);
        assert_eq!(qt.find_leaf(Point::new(202, 202)), qt.root.child(3));
        assert_eq!(qt.node(qt.root.child(3)).count, 1);
        assert_eq!(qt.node(qt.root.child(0)).count, 8);
        qt.check_invariants();
    }

    #[test]
    fn relocate_out_keeps_parent_split() {
        let mut qt = crowded_tree();
        assert_eq!(qt.leaf_count(), 4);
        // Moving elements out one by one keeps the root split since the
        // count under it never drops.
        for i in 0..5 {
            assert!(qt.relocate(&i, Rectangle::new(200, 200, 4, 4)));
            qt.check_invariants();
        }
        assert_eq!(qt.leaf_count(), 4);
        assert!(!qt.relocate(&42, Rectangle::new(0, 0, 1, 1)));
    }

    #[test]
    fn shrink_to_fit_recomputes_margin() {
        let mut qt = crowded_tree();
        qt.add(100, Rectangle::new(0, 0, 200, 150));
        assert_eq!(qt.max_extent, Size::new(200, 150));
        qt.remove(&100);
        assert_eq!(qt.max_extent, Size::new(200, 150));
        qt.shrink_to_fit();
        assert_eq!(qt.max_extent, Size::new(4, 4));
        qt.check_invariants();
    }
}
