pub mod error;
pub mod free_list;
pub mod quadtree;

pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
pub use free_list::FreeList;
pub use quadtree::{CellPainter, Config, Quadtree, StorageStats};
