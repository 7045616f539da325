//! Core game constants

/// Default map dimensions
pub const MAP_WIDTH: usize = 40;
pub const MAP_HEIGHT: usize = 40;

/// Default sight radius for the player's field of view
pub const FOV_RADIUS: u32 = 5;

/// Default minimum delay between two player turns, in milliseconds
pub const TURN_INTERVAL_MS: u64 = 200;

/// Sprite indices in the creature sheet
pub const SPRITE_PLAYER_RIGHT: u16 = 0;
pub const SPRITE_PLAYER_LEFT: u16 = 1;
pub const SPRITE_SPIDER_RIGHT: u16 = 2;
pub const SPRITE_SPIDER_LEFT: u16 = 3;
pub const SPRITE_DOOR_OPENED: u16 = 6;
pub const SPRITE_DOOR_CLOSED: u16 = 7;

/// Render order of living creatures (drawn above everything else)
pub const RENDER_ORDER_CREATURE: i32 = 10;

/// Render order of corpses (below living creatures)
pub const RENDER_ORDER_CORPSE: i32 = 9;

/// Render order of doors and other fixtures
pub const RENDER_ORDER_FIXTURE: i32 = 1;

/// Map symbols
pub const S_PLAYER: char = '@';
pub const S_SPIDER: char = 's';
pub const S_DOOR_CLOSED: char = '+';
pub const S_DOOR_OPEN: char = '\'';
