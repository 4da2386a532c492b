//! The grid world the reference problems are defined over. The search core
//! only sees it through the problem traits in [`crate::search`].

mod layout;
mod point;
mod terrain_map;

pub use layout::{Layout, LayoutError};
pub use point::{Direction, Point};
pub use terrain_map::TerrainMap;
