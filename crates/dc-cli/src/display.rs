//! Text rendering of the game state
//!
//! Unexplored cells are blank, remembered cells show their tile, and
//! entities are drawn only where the player can currently see.

use dc_core::GameState;
use dc_core::dungeon::Tile;
use dc_core::entity::Entity;

const UNEXPLORED: char = ' ';

/// Character for a tile the player has explored
pub fn tile_char(tile: &Tile) -> char {
    if tile.explored { tile.symbol() } else { UNEXPLORED }
}

/// Topmost drawable entity on (x, y)
fn top_entity(entities: &[Entity], x: i32, y: i32) -> Option<&Entity> {
    entities
        .iter()
        .filter(|e| e.is_at(x, y) && e.appearance.is_some())
        .max_by_key(|e| e.render_order)
}

/// Character shown at (x, y)
pub fn glyph_at(state: &GameState, x: i32, y: i32) -> char {
    if state.visible.contains(x, y)
        && let Some(look) = top_entity(&state.entities, x, y).and_then(|e| e.appearance)
    {
        return look.glyph;
    }
    state.tiles.get(x, y).map_or(UNEXPLORED, tile_char)
}

/// The whole map, one string per row
pub fn render_map(state: &GameState) -> Vec<String> {
    (0..state.tiles.height() as i32)
        .map(|y| {
            (0..state.tiles.width() as i32)
                .map(|x| glyph_at(state, x, y))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// One-line summary of the player
pub fn status_line(state: &GameState) -> String {
    let (x, y) = state.player_pos();
    let hp = state
        .player_entity()
        .health
        .map_or_else(|| "-".to_string(), |h| format!("{}/{}", h.current, h.total));
    format!("Turn {}  HP {hp}  Pos ({x}, {y})", state.turns)
}
