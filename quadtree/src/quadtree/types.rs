use super::*;

pub(crate) const NIL: u32 = u32::MAX;

pub(crate) const EDGE_LEFT: u8 = 0b0001;
pub(crate) const EDGE_TOP: u8 = 0b0010;
pub(crate) const EDGE_RIGHT: u8 = 0b0100;
pub(crate) const EDGE_BOTTOM: u8 = 0b1000;
pub(crate) const EDGE_ALL: u8 = EDGE_LEFT | EDGE_TOP | EDGE_RIGHT | EDGE_BOTTOM;

// Quadrants are numbered top-left, top-right, bottom-left, bottom-right:
// bit 0 selects the right half, bit 1 the bottom half.
pub(crate) const QUADRANT_RIGHT: usize = 0b01;
pub(crate) const QUADRANT_BOTTOM: usize = 0b10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeId {
    Root,
    Child { group: u32, quadrant: u8 },
}

/// A leaf (`first_child` heads its element list) or an internal node
/// (`first_child` is the group holding its four children).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) first_child: u32,
    pub(crate) count: u32,
    pub(crate) is_leaf: bool,
}

const _: () = assert!(std::mem::size_of::<Node>() <= 8 * std::mem::size_of::<i32>());

impl Node {
    #[inline(always)]
    pub(crate) fn empty_leaf() -> Self {
        Self {
            first_child: NIL,
            count: 0,
            is_leaf: true,
        }
    }

    #[inline(always)]
    pub(crate) fn child(&self, quadrant: usize) -> NodeId {
        debug_assert!(!self.is_leaf);
        NodeId::Child {
            group: self.first_child,
            quadrant: quadrant as u8,
        }
    }
}

pub(crate) type NodeStack = SmallVec<[(NodeId, QuadAxis); 64]>;
