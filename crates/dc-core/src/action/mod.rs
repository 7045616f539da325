//! Player actions
//!
//! A turn is driven by a single direction: moving, attacking and opening
//! doors are all "bump" actions toward a neighboring cell.

pub mod turn;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use turn::{TurnOutcome, resolve_player_turn};

/// Movement directions, plus standing still
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Stay,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
            Direction::Stay => (0, 0),
        }
    }

    /// Get direction from delta values, or None for anything that is not a single step
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (1, -1) => Some(Direction::NorthEast),
            (-1, -1) => Some(Direction::NorthWest),
            (1, 1) => Some(Direction::SouthEast),
            (-1, 1) => Some(Direction::SouthWest),
            (0, 0) => Some(Direction::Stay),
            _ => None,
        }
    }

    /// Map a key to a direction: vi-keys (`hjklyubn`), numpad digits
    /// (`5` waits) and `.` to wait.
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'k' | '8' => Some(Direction::North),
            'j' | '2' => Some(Direction::South),
            'l' | '6' => Some(Direction::East),
            'h' | '4' => Some(Direction::West),
            'u' | '9' => Some(Direction::NorthEast),
            'y' | '7' => Some(Direction::NorthWest),
            'n' | '3' => Some(Direction::SouthEast),
            'b' | '1' => Some(Direction::SouthWest),
            '.' | '5' => Some(Direction::Stay),
            _ => None,
        }
    }

    pub const fn is_stay(&self) -> bool {
        matches!(self, Direction::Stay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_delta_round_trips() {
        for dir in Direction::iter() {
            let (dx, dy) = dir.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(dir));
        }
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(Direction::from_key('h'), Some(Direction::West));
        assert_eq!(Direction::from_key('u'), Some(Direction::NorthEast));
        assert_eq!(Direction::from_key('8'), Some(Direction::North));
        assert_eq!(Direction::from_key('1'), Some(Direction::SouthWest));
        assert_eq!(Direction::from_key('5'), Some(Direction::Stay));
        assert_eq!(Direction::from_key('x'), None);
        assert!(Direction::from_key('.').unwrap().is_stay());
    }
}
