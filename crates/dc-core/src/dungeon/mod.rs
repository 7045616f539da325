//! Dungeon level data
//!
//! Tiles, the generator's layout hand-off, and level population.

mod layout;
mod populate;
mod tile;

pub use layout::{Layout, LayoutRoom, tiles_from_layout};
pub use populate::{make_door, make_player, make_spider, populate};
pub use tile::{Tile, TileKind};
