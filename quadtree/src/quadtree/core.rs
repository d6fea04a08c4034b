use super::*;

impl<T> Quadtree<T, FxBuildHasher>
where
    T: Clone + Eq + Hash,
{
    pub fn new(space: Rectangle) -> Self {
        Self::build(space, Config::default(), FxBuildHasher::default())
    }

    pub fn new_with_config(space: Rectangle, config: Config) -> QuadtreeResult<Self> {
        Self::with_config_and_hasher(space, config, FxBuildHasher::default())
    }
}

impl<T, S> Quadtree<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    pub fn with_config_and_hasher(
        space: Rectangle,
        config: Config,
        hash_builder: S,
    ) -> QuadtreeResult<Self> {
        config.validate()?;
        Ok(Self::build(space, config, hash_builder))
    }

    fn build(space: Rectangle, config: Config, hash_builder: S) -> Self {
        let element_nodes = FreeList::with_capacity(config.pool_size);
        let elements_infos = HashMap::with_capacity_and_hasher(config.pool_size, hash_builder);
        Self {
            space,
            config,
            root: Node::empty_leaf(),
            nodes: FreeList::new(),
            element_nodes,
            elements_infos,
            max_extent: Size::default(),
        }
    }

    /// Empties the tree and makes it cover `space`.
    pub fn initialize(&mut self, space: Rectangle) {
        self.clear();
        self.space = space;
        debug!(space = %space, "initialized quadtree");
    }

    pub fn clear(&mut self) {
        self.root = Node::empty_leaf();
        self.nodes.clear();
        self.element_nodes.clear();
        self.elements_infos.clear();
        self.max_extent = Size::default();
        debug!(space = %self.space, "cleared quadtree");
    }

    pub fn get_space(&self) -> Rectangle {
        self.space
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get_num_elements(&self) -> usize {
        self.root.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.root.count == 0
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements_infos.contains_key(element)
    }

    pub fn get_bounding_box(&self, element: &T) -> Option<Rectangle> {
        let index = *self.elements_infos.get(element)?;
        Some(self.element_nodes[index].bbox)
    }

    /// Inserts `element` with bounding box `bbox`.
    ///
    /// Returns `false` and leaves the tree untouched if an equal element is
    /// already present.
    pub fn add(&mut self, element: T, bbox: Rectangle) -> bool {
        if self.elements_infos.contains_key(&element) {
            return false;
        }
        let index = self.element_nodes.insert(ElementNode {
            element: element.clone(),
            bbox,
            next: NIL,
        });
        self.elements_infos.insert(element, index);
        self.grow_extent(bbox);
        self.insert_element(index, bbox.center());
        true
    }

    /// Returns `false` if `element` is not in the tree.
    pub fn remove(&mut self, element: &T) -> bool {
        let index = match self.elements_infos.remove(element) {
            Some(index) => index,
            None => return false,
        };
        self.detach_element(index);
        self.element_nodes.erase(index);
        true
    }

    /// Files an allocated element node under the leaf holding `center`,
    /// splitting that leaf once if it overflows.
    pub(crate) fn insert_element(&mut self, index: u32, center: Point) {
        let mut id = NodeId::Root;
        let mut axis = self.root_axis();
        loop {
            let node = self.node_mut(id);
            node.count += 1;
            if node.is_leaf {
                break;
            }
            let quadrant = axis.quadrant_of(center);
            id = node.child(quadrant);
            axis = axis.child(quadrant);
        }
        self.link_element(id, index);
        if self.node(id).count > self.config.max_in_cell && axis.can_split(self.config.min_cell_size)
        {
            self.node_split(id, axis);
        }
    }

    /// Unlinks an element node from its leaf without freeing it, then merges
    /// every ancestor left with `min_in_4_cells` elements or fewer.
    pub(crate) fn detach_element(&mut self, index: u32) {
        let center = self.element_nodes[index].bbox.center();
        let mut path = NodeStack::new();
        let mut id = NodeId::Root;
        let mut axis = self.root_axis();
        loop {
            let node = self.node_mut(id);
            debug_assert!(node.count > 0);
            node.count -= 1;
            if node.is_leaf {
                break;
            }
            path.push((id, axis));
            let quadrant = axis.quadrant_of(center);
            id = node.child(quadrant);
            axis = axis.child(quadrant);
        }
        self.unlink_element(id, index);

        while let Some((id, axis)) = path.pop() {
            if self.node(id).count > self.config.min_in_4_cells {
                break;
            }
            self.node_merge(id, axis);
        }
    }

    /// Leaf that holds, or would hold, an element centered on `point`.
    pub(crate) fn find_leaf(&self, point: Point) -> NodeId {
        let mut id = NodeId::Root;
        let mut axis = self.root_axis();
        loop {
            let node = self.node(id);
            if node.is_leaf {
                return id;
            }
            let quadrant = axis.quadrant_of(point);
            id = node.child(quadrant);
            axis = axis.child(quadrant);
        }
    }
}

impl<T, S> Default for Quadtree<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::build(Rectangle::default(), Config::default(), S::default())
    }
}
