//! Adaptive quadtree over a bounded 2D space.
//!
//! Elements are filed under the single leaf whose cell contains the center of
//! their bounding box. Leaves split when they hold more than
//! `Config::max_in_cell` elements and merge back once four siblings hold at
//! most `Config::min_in_4_cells`. Queries test true bounding-box overlap, so
//! an element is reported whenever its box overlaps the query rectangle, even
//! if its box reaches into cells other than the one storing it.

mod cells;
mod config;
mod core;
mod extents;
mod maintenance;
mod query_rect;
mod rebuild_storage;
mod storage;
mod types;

pub use cells::CellPainter;
pub use config::Config;
pub use storage::{Quadtree, StorageStats};

use crate::error::QuadtreeResult;
use crate::free_list::FreeList;
use common::shapes::{Point, Rectangle, Size};
use extents::QuadAxis;
use fxhash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use storage::ElementNode;
use tracing::{debug, trace};
use types::*;
