//! Wall tile catalogue
//!
//! Fixed table from wall category to the neighbor patterns that produce it
//! and the sprite variants that can draw it. The table is inverted once,
//! on first use, into a direct bitmask lookup.

use std::sync::LazyLock;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Bitmask key reserved for the fallback entry
pub const ERROR_BITMASK: u32 = 256;

/// Rendering category of a wall tile
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WallCategory {
    PillarBoth,
    PillarLeft,
    PillarRight,
    Void,
    Error,
    Wall,
    WallContinueLeftCorner,
    WallContinueLeftCornerRight,
    WallContinueLeftCornerRightRight,
    WallContinueRightCorner,
    WallContinueRightCornerLeft,
    WallCornerBoth,
    WallCornerLeft,
    WallCornerLeftDown,
    WallCornerLeftDownCornerRight,
    WallCornerRight,
    WallCornerRightCornerLeft,
    WallCornerRightCornerLeftUp,
    WallCornerRightDown,
    WallLeftContinue,
    WallPillarLeft,
    WallRightContinue,
    WallSingle,
    WallSingleAlone,
    WallTopContinue,
    WallTopEnd,
}

/// One catalogue row: category, sprite variants, bitmasks
type CatalogueRow = (WallCategory, &'static [u16], &'static [u32]);

const WALL_TILES: &[CatalogueRow] = &[
    (WallCategory::PillarBoth, &[12], &[48]),
    (WallCategory::PillarLeft, &[11, 10], &[16]),
    (WallCategory::PillarRight, &[48, 35], &[32]),
    (WallCategory::Void, &[47], &[0]),
    (WallCategory::Error, &[52], &[ERROR_BITMASK]),
    (
        WallCategory::Wall,
        &[34, 21],
        &[
            17, 33, 49, 68, 85, 101, 117, 132, 149, 161, 165, 181, 196, 213, 229, 245,
        ],
    ),
    (WallCategory::WallContinueLeftCorner, &[8], &[64, 80, 224]),
    (WallCategory::WallContinueLeftCornerRight, &[46], &[104, 120]),
    (
        WallCategory::WallContinueLeftCornerRightRight,
        &[33],
        &[56, 152, 216],
    ),
    (WallCategory::WallContinueRightCorner, &[20], &[128, 160]),
    (
        WallCategory::WallContinueRightCornerLeft,
        &[7, 45],
        &[50, 146, 178],
    ),
    (WallCategory::WallCornerBoth, &[32, 19], &[192]),
    (
        WallCategory::WallCornerLeft,
        &[6, 44],
        &[76, 92, 148, 156, 220, 221],
    ),
    (
        WallCategory::WallCornerLeftDown,
        &[31, 18],
        &[25, 89, 57, 97, 105, 113, 121],
    ),
    (WallCategory::WallCornerLeftDownCornerRight, &[5, 43], &[96]),
    (
        WallCategory::WallCornerRight,
        &[30, 17],
        &[100, 102, 134, 166, 183, 198, 228, 230, 231, 247],
    ),
    (WallCategory::WallCornerRightCornerLeft, &[4], &[98, 194, 226]),
    (WallCategory::WallCornerRightCornerLeftUp, &[42, 29], &[144]),
    (
        WallCategory::WallCornerRightDown,
        &[16, 3],
        &[35, 51, 145, 147, 163, 177, 179],
    ),
    (WallCategory::WallLeftContinue, &[41], &[24, 72, 88]),
    (WallCategory::WallPillarLeft, &[28, 15], &[125, 204, 212, 253]),
    (WallCategory::WallRightContinue, &[2], &[34, 162, 130]),
    (WallCategory::WallSingle, &[40, 27], &[206]),
    (
        WallCategory::WallSingleAlone,
        &[14, 1],
        &[124, 182, 214, 222, 238, 239, 246, 252, 254, 255],
    ),
    (
        WallCategory::WallTopContinue,
        &[39, 26],
        &[58, 106, 122, 154, 186, 200, 202, 218, 234, 250],
    ),
    (
        WallCategory::WallTopEnd,
        &[13, 0],
        &[123, 187, 217, 243, 249, 251],
    ),
];

/// A resolved wall tile: its category and the sprites that may draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTile {
    pub category: WallCategory,
    pub variants: &'static [u16],
}

static WALL_LOOKUP: LazyLock<HashMap<u32, WallTile>> = LazyLock::new(|| {
    let mut lookup = HashMap::new();
    for &(category, variants, bitmasks) in WALL_TILES {
        for &bitmask in bitmasks {
            lookup.insert(bitmask, WallTile { category, variants });
        }
    }
    lookup
});

/// Look up the wall tile for a neighbor bitmask.
///
/// Patterns with no catalogue entry, including anything above 255,
/// resolve to the [`WallCategory::Error`] tile.
pub fn resolve_wall_tile(bitmask: u32) -> &'static WallTile {
    WALL_LOOKUP
        .get(&bitmask)
        .or_else(|| WALL_LOOKUP.get(&ERROR_BITMASK))
        .unwrap_or(&ERROR_TILE)
}

// Only reached if the table above ever loses its error row.
static ERROR_TILE: WallTile = WallTile {
    category: WallCategory::Error,
    variants: &[52],
};

/// Every bitmask in `0..=255` that has its own catalogue entry
pub fn known_bitmasks() -> impl Iterator<Item = u32> {
    (0..ERROR_BITMASK).filter(|b| WALL_LOOKUP.contains_key(b))
}
