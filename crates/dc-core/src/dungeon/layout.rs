//! Generated level layout consumed by the core
//!
//! A layout is what a level generator hands over: one wall/floor boolean
//! per cell and the rooms it carved, each with a center and the doorways
//! leading into it. The core never carves levels itself.

use serde::{Deserialize, Serialize};

use super::Tile;
use crate::grid::TileGrid;

/// A carved room as seen by the core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRoom {
    pub center: (i32, i32),
    pub doors: Vec<(i32, i32)>,
}

impl LayoutRoom {
    pub fn new(center: (i32, i32), doors: Vec<(i32, i32)>) -> Self {
        Self { center, doors }
    }

    /// Doorway coordinates on this room's boundary
    pub fn doors(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.doors.iter().copied()
    }
}

/// Output of a level generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// `true` where the generator left solid wall
    pub walls: TileGrid<bool>,
    /// Rooms in generation order; the first one hosts the player
    pub rooms: Vec<LayoutRoom>,
}

impl Layout {
    pub fn new(walls: TileGrid<bool>, rooms: Vec<LayoutRoom>) -> Self {
        Self { walls, rooms }
    }

    /// Build a layout from a text picture: `#` is wall, anything else is floor.
    ///
    /// Lines are trimmed and blank lines skipped; short lines are padded with wall.
    pub fn from_ascii(picture: &str) -> Self {
        let lines: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let walls = TileGrid::from_fn(width, height, |x, y| {
            lines[y].chars().nth(x).is_none_or(|c| c == '#')
        });
        Self::new(walls, Vec::new())
    }

    /// Add a room (builder style)
    pub fn with_room(mut self, center: (i32, i32), doors: Vec<(i32, i32)>) -> Self {
        self.rooms.push(LayoutRoom::new(center, doors));
        self
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    /// Check for wall; everything outside the layout counts as wall
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.walls.get(x, y).copied().unwrap_or(true)
    }
}

/// Turn a layout's wall booleans into fresh, unexplored tiles
pub fn tiles_from_layout(layout: &Layout) -> TileGrid<Tile> {
    TileGrid::from_fn(layout.width(), layout.height(), |x, y| {
        if layout.is_wall(x as i32, y as i32) {
            Tile::wall()
        } else {
            Tile::floor()
        }
    })
}
