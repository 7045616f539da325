//! Scripted input
//!
//! A script is a string of movement keys (vi-keys, numpad digits or `.`).
//! Whitespace is ignored so long scripts can be split over lines.

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use dc_core::action::{Direction, TurnOutcome};
use dc_core::{GameState, TurnThrottle};
use log::debug;

/// Convert a key script to directions
pub fn parse_script(script: &str) -> Result<Vec<Direction>> {
    let mut directions = Vec::new();
    for (i, key) in script.chars().enumerate() {
        if key.is_whitespace() {
            continue;
        }
        match Direction::from_key(key) {
            Some(dir) => directions.push(dir),
            None => bail!("unknown key '{key}' at position {i}"),
        }
    }
    Ok(directions)
}

/// Feed keys to the game as if one arrived every `key_interval`.
///
/// Keys that arrive before the turn throttle allows another turn are
/// dropped, like key repeats during the turn delay. Returns the outcome of
/// every accepted key.
pub fn replay(
    state: &mut GameState,
    keys: &[Direction],
    key_interval: Duration,
) -> Vec<TurnOutcome> {
    let mut throttle = TurnThrottle::from_config(&state.config);
    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(keys.len());

    for (i, &dir) in keys.iter().enumerate() {
        let now = start + key_interval * i as u32;
        if !throttle.try_accept(now) {
            debug!("key {i} ({dir}) dropped by the turn delay");
            continue;
        }
        outcomes.push(state.step(dir));
    }
    outcomes
}
