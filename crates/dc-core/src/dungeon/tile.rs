//! Map tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::autotile::WallCategory;

/// Terrain kind, fixed once the level is generated
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Wall = 1,
    Floor = 2,
}

/// A single map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Terrain kind
    pub kind: TileKind,

    /// Has been seen by the player. Never reset once set.
    pub explored: bool,

    /// Blocks movement
    pub blocker: bool,

    /// Blocks line of sight
    pub light_blocker: bool,

    /// Last computed neighbor pattern (walls only)
    pub bitmask: u8,

    /// Resolved wall category, `None` until first resolved
    pub category: Option<WallCategory>,

    /// Sprite variant chosen within `category`
    pub variant: Option<u16>,
}

impl Default for Tile {
    fn default() -> Self {
        Self::wall()
    }
}

impl Tile {
    /// Create a wall tile
    pub const fn wall() -> Self {
        Self {
            kind: TileKind::Wall,
            explored: false,
            blocker: true,
            light_blocker: true,
            bitmask: 0,
            category: None,
            variant: None,
        }
    }

    /// Create a floor tile
    pub const fn floor() -> Self {
        Self {
            kind: TileKind::Floor,
            explored: false,
            blocker: false,
            light_blocker: false,
            bitmask: 0,
            category: None,
            variant: None,
        }
    }

    pub const fn is_wall(&self) -> bool {
        matches!(self.kind, TileKind::Wall)
    }

    pub const fn is_floor(&self) -> bool {
        matches!(self.kind, TileKind::Floor)
    }

    /// Floor the player has already seen; these are what walls autotile against.
    pub const fn is_explored_floor(&self) -> bool {
        self.is_floor() && self.explored
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self.kind {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
        }
    }
}
