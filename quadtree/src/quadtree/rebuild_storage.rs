use super::*;

impl<T, S> Quadtree<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Moves every live node group and element node into fresh, exactly
    /// sized free lists, in depth-first order, so siblings and the elements
    /// of a leaf end up next to each other. Leaf lists keep their order.
    pub(crate) fn rebuild_storage(&mut self) {
        let old_nodes = std::mem::take(&mut self.nodes);
        let mut old_element_nodes = std::mem::take(&mut self.element_nodes);
        self.nodes = FreeList::with_capacity(old_nodes.len());
        self.element_nodes = FreeList::with_capacity(old_element_nodes.len());

        let mut stack: SmallVec<[(NodeId, Node); 64]> = SmallVec::new();
        stack.push((NodeId::Root, self.root));
        while let Some((id, old)) = stack.pop() {
            if old.is_leaf {
                let mut head = NIL;
                let mut tail = NIL;
                let mut current = old.first_child;
                while current != NIL {
                    let element_node = old_element_nodes.remove(current);
                    current = element_node.next;
                    let index = self.element_nodes.insert(ElementNode {
                        next: NIL,
                        ..element_node
                    });
                    if let Some(slot) = self
                        .elements_infos
                        .get_mut(&self.element_nodes[index].element)
                    {
                        *slot = index;
                    }
                    if tail == NIL {
                        head = index;
                    } else {
                        self.element_nodes[tail].next = index;
                    }
                    tail = index;
                }
                *self.node_mut(id) = Node {
                    first_child: head,
                    ..old
                };
            } else {
                let children = old_nodes[old.first_child];
                let group = self.nodes.insert([Node::empty_leaf(); 4]);
                *self.node_mut(id) = Node {
                    first_child: group,
                    ..old
                };
                for quadrant in (0..4).rev() {
                    stack.push((
                        NodeId::Child {
                            group,
                            quadrant: quadrant as u8,
                        },
                        children[quadrant],
                    ));
                }
            }
        }
        debug_assert!(old_element_nodes.is_empty());
    }
}
