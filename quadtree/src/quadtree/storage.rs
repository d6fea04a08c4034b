use super::*;

pub(crate) struct ElementNode<T> {
    pub(crate) element: T,
    pub(crate) bbox: Rectangle,
    pub(crate) next: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageStats {
    /// Live groups of four sibling nodes.
    pub node_groups: usize,
    /// Node group slots allocated, free ones included.
    pub node_group_range: usize,
    /// Live element nodes.
    pub element_nodes: usize,
    /// Element node slots allocated, free ones included.
    pub element_range: usize,
}

/// Spatial index of `(element, bounding box)` pairs.
///
/// `T` is both the stored value and the key of the side index used by
/// `remove`, `relocate` and `contains`: two live elements must never compare
/// equal, and `T` should be a cheap handle since the tree keeps two copies of
/// it. `S` picks the hasher of that index.
///
/// Element boxes follow the half-open convention of [`Rectangle`]: boxes that
/// merely touch do not overlap and empty boxes never match a query.
pub struct Quadtree<T, S = FxBuildHasher> {
    pub(crate) space: Rectangle,
    pub(crate) config: Config,
    pub(crate) root: Node,
    pub(crate) nodes: FreeList<[Node; 4]>,
    pub(crate) element_nodes: FreeList<ElementNode<T>>,
    pub(crate) elements_infos: HashMap<T, u32, S>,
    pub(crate) max_extent: Size,
}

impl<T, S> Quadtree<T, S> {
    #[inline(always)]
    pub(crate) fn root_axis(&self) -> QuadAxis {
        QuadAxis::root(self.space)
    }

    #[inline(always)]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        match id {
            NodeId::Root => &self.root,
            NodeId::Child { group, quadrant } => &self.nodes[group][quadrant as usize],
        }
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match id {
            NodeId::Root => &mut self.root,
            NodeId::Child { group, quadrant } => &mut self.nodes[group][quadrant as usize],
        }
    }

    pub fn storage_stats(&self) -> StorageStats {
        StorageStats {
            node_groups: self.nodes.len(),
            node_group_range: self.nodes.range(),
            element_nodes: self.element_nodes.len(),
            element_range: self.element_nodes.range(),
        }
    }

    #[inline(always)]
    pub(crate) fn grow_extent(&mut self, bbox: Rectangle) {
        self.max_extent.width = self.max_extent.width.max(bbox.width);
        self.max_extent.height = self.max_extent.height.max(bbox.height);
    }

    /// Pushes `index` at the head of the leaf's element list.
    pub(crate) fn link_element(&mut self, leaf: NodeId, index: u32) {
        let head = self.node(leaf).first_child;
        self.element_nodes[index].next = head;
        self.node_mut(leaf).first_child = index;
    }

    pub(crate) fn unlink_element(&mut self, leaf: NodeId, index: u32) {
        let mut prev = NIL;
        let mut current = self.node(leaf).first_child;
        while current != index {
            debug_assert!(current != NIL, "element {} missing from its leaf", index);
            prev = current;
            current = self.element_nodes[current].next;
        }
        let next = self.element_nodes[current].next;
        if prev == NIL {
            self.node_mut(leaf).first_child = next;
        } else {
            self.element_nodes[prev].next = next;
        }
        self.element_nodes[current].next = NIL;
    }

    /// Turns a leaf into an internal node with four fresh leaves and files
    /// each of its elements under the quadrant holding its center.
    pub(crate) fn node_split(&mut self, id: NodeId, axis: QuadAxis) {
        let group = self.nodes.insert([Node::empty_leaf(); 4]);
        let mut current = self.node(id).first_child;
        while current != NIL {
            let element = &mut self.element_nodes[current];
            let next = element.next;
            let quadrant = axis.quadrant_of(element.bbox.center());
            let child = &mut self.nodes[group][quadrant];
            element.next = child.first_child;
            child.first_child = current;
            child.count += 1;
            current = next;
        }
        let node = self.node_mut(id);
        node.first_child = group;
        node.is_leaf = false;
        trace!(
            cell = %axis.cell,
            depth = axis.depth,
            count = node.count,
            "split quadtree cell"
        );
    }

    /// Collapses the four children of an internal node back into it, merging
    /// deeper levels first if needed, and frees the child group.
    pub(crate) fn node_merge(&mut self, id: NodeId, axis: QuadAxis) {
        let node = *self.node(id);
        debug_assert!(!node.is_leaf);
        for quadrant in 0..4 {
            let child = node.child(quadrant);
            if !self.node(child).is_leaf {
                self.node_merge(child, axis.child(quadrant));
            }
        }
        let children = self.nodes[node.first_child];
        let mut head = NIL;
        for child in children.iter() {
            let mut current = child.first_child;
            while current != NIL {
                let element = &mut self.element_nodes[current];
                let next = element.next;
                element.next = head;
                head = current;
                current = next;
            }
        }
        self.nodes.erase(node.first_child);
        let node = self.node_mut(id);
        node.first_child = head;
        node.is_leaf = true;
        trace!(
            cell = %axis.cell,
            depth = axis.depth,
            count = node.count,
            "merged quadtree cell"
        );
    }
}
