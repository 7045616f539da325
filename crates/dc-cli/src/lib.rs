//! dc-cli: headless front end for the dungeon crawler
//!
//! Replays key scripts against a generated level and renders the result
//! as text.

pub mod display;
pub mod input;

pub use display::{glyph_at, render_map, status_line};
pub use input::{parse_script, replay};
