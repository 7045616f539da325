//! Eight-neighbor occupancy bitmask

use bitflags::bitflags;

use crate::dungeon::Tile;
use crate::grid::TileGrid;

bitflags! {
    /// Which neighbors of a wall are explored floor
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Neighbors: u8 {
        const NORTH = 1;
        const EAST = 2;
        const SOUTH = 4;
        const WEST = 8;
        const NORTH_WEST = 16;
        const NORTH_EAST = 32;
        const SOUTH_WEST = 64;
        const SOUTH_EAST = 128;
    }
}

/// Offset of each neighbor bit
const OFFSETS: [(Neighbors, i32, i32); 8] = [
    (Neighbors::NORTH, 0, -1),
    (Neighbors::EAST, 1, 0),
    (Neighbors::SOUTH, 0, 1),
    (Neighbors::WEST, -1, 0),
    (Neighbors::NORTH_WEST, -1, -1),
    (Neighbors::NORTH_EAST, 1, -1),
    (Neighbors::SOUTH_WEST, -1, 1),
    (Neighbors::SOUTH_EAST, 1, 1),
];

impl Neighbors {
    /// Collect the neighbors of (x, y) for which `pred` holds.
    ///
    /// Neighbors outside the grid never match.
    pub fn around<T>(grid: &TileGrid<T>, x: i32, y: i32, pred: impl Fn(&T) -> bool) -> Self {
        OFFSETS
            .iter()
            .filter(|(_, dx, dy)| grid.get(x + dx, y + dy).is_some_and(&pred))
            .fold(Neighbors::empty(), |acc, (bit, _, _)| acc | *bit)
    }
}

/// Bitmask of explored floor around (x, y)
pub fn wall_bitmask(grid: &TileGrid<Tile>, x: i32, y: i32) -> Neighbors {
    Neighbors::around(grid, x, y, Tile::is_explored_floor)
}
