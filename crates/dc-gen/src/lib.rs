//! dc-gen: level generation for the dungeon crawler
//!
//! Carves rectangular rooms out of solid rock, joins consecutive rooms
//! with L-shaped corridors and records every one-cell opening in a room's
//! wall as a doorway. Levels with fewer than two rooms are thrown away and
//! generated again.

mod room;

use dc_core::dungeon::{Layout, LayoutRoom};
use dc_core::{GameConfig, GameRng, TileGrid};
use log::debug;
use thiserror::Error;

pub use room::Room;

/// A level needs a start room and at least one more
pub const MIN_ROOMS: usize = 2;

/// How many levels to try before giving up
pub const MAX_ATTEMPTS: usize = 100;

const MIN_ROOM_SIDE: usize = 3;
const MAX_ROOM_WIDTH: usize = 8;
const MAX_ROOM_HEIGHT: usize = 6;

/// Errors from level generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Map of {width}x{height} cannot hold two rooms")]
    MapTooSmall { width: usize, height: usize },

    #[error("No level with two rooms after {attempts} attempts")]
    TooFewRooms { attempts: usize },
}

/// Generate a level of the configured size
pub fn generate_for(config: &GameConfig, rng: &mut GameRng) -> Result<Layout, GenerationError> {
    generate(config.map_width, config.map_height, rng)
}

/// Generate a `width × height` level with at least two rooms
pub fn generate(width: usize, height: usize, rng: &mut GameRng) -> Result<Layout, GenerationError> {
    // two minimal rooms side by side, with walls and a border
    let side_by_side =
        |long: usize, short: usize| long >= 2 * MIN_ROOM_SIDE + 4 && short >= MIN_ROOM_SIDE + 2;
    if !side_by_side(width, height) && !side_by_side(height, width) {
        return Err(GenerationError::MapTooSmall { width, height });
    }

    for attempt in 1..=MAX_ATTEMPTS {
        let layout = generate_once(width, height, rng);
        if layout.rooms.len() >= MIN_ROOMS {
            debug!(
                "generated {width}x{height} level with {} rooms (attempt {attempt})",
                layout.rooms.len()
            );
            return Ok(layout);
        }
        debug!("only {} rooms on attempt {attempt}, retrying", layout.rooms.len());
    }
    Err(GenerationError::TooFewRooms {
        attempts: MAX_ATTEMPTS,
    })
}

fn generate_once(width: usize, height: usize, rng: &mut GameRng) -> Layout {
    let rooms = place_rooms(width, height, rng);
    let mut walls = TileGrid::filled(width, height, true);

    for room in &rooms {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                walls.set(x as i32, y as i32, false);
            }
        }
    }

    for pair in rooms.windows(2) {
        dig_corridor(&mut walls, pair[0].center(), pair[1].center(), rng);
    }

    let layout_rooms = rooms
        .iter()
        .map(|room| LayoutRoom::new(room.center(), find_doors(&walls, room)))
        .collect();
    Layout::new(walls, layout_rooms)
}

/// Pick non-overlapping rooms that leave the map's border intact
fn place_rooms(width: usize, height: usize, rng: &mut GameRng) -> Vec<Room> {
    // 6-9 rooms
    let num_rooms = (rng.rnd(4) + 5) as usize;
    let mut rooms: Vec<Room> = Vec::new();

    for _ in 0..num_rooms * 3 {
        let w = rng.range(MIN_ROOM_SIDE, MAX_ROOM_WIDTH.min(width - 2));
        let h = rng.range(MIN_ROOM_SIDE, MAX_ROOM_HEIGHT.min(height - 2));
        let x = rng.range(1, width - 1 - w);
        let y = rng.range(1, height - 1 - h);
        let room = Room::new(x, y, w, h);

        if rooms.iter().any(|r| room.overlaps(r, 1)) {
            continue;
        }
        rooms.push(room);
        if rooms.len() >= num_rooms {
            break;
        }
    }
    rooms
}

/// Carve an L-shaped corridor between two points, turning either
/// horizontally or vertically first
fn dig_corridor(walls: &mut TileGrid<bool>, from: (i32, i32), to: (i32, i32), rng: &mut GameRng) {
    let corner = if rng.one_in(2) {
        (to.0, from.1)
    } else {
        (from.0, to.1)
    };
    for (a, b) in [(from, corner), (corner, to)] {
        for x in a.0.min(b.0)..=a.0.max(b.0) {
            for y in a.1.min(b.1)..=a.1.max(b.1) {
                walls.set(x, y, false);
            }
        }
    }
}

/// Openings in the room's wall ring exactly one cell wide that lead
/// outside
fn find_doors(walls: &TileGrid<bool>, room: &Room) -> Vec<(i32, i32)> {
    let is_floor = |x: i32, y: i32| !walls.get(x, y).copied().unwrap_or(true);

    room.wall_ring()
        .filter(|&((x, y), (dx, dy))| {
            // the two ring neighbours lie across the outward step
            is_floor(x, y)
                && is_floor(x + dx, y + dy)
                && !is_floor(x + dy, y + dx)
                && !is_floor(x - dy, y - dx)
        })
        .map(|(cell, _)| cell)
        .collect()
}
