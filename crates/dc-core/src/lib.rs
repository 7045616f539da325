//! dc-core: Core game logic for the dungeon crawler
//!
//! Tiles, wall autotiling, field of view and turn resolution. This crate
//! has no I/O; map generation and front ends live in their own crates.

pub mod action;
pub mod autotile;
pub mod config;
pub mod dungeon;
pub mod entity;
pub mod gameloop;
pub mod grid;
pub mod vision;

mod consts;
mod rng;

pub use config::{ConfigError, GameConfig};
pub use consts::*;
pub use gameloop::{GameState, TurnPhase, TurnThrottle};
pub use grid::{Rect, TileGrid};
pub use rng::GameRng;
