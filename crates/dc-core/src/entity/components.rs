//! Entity components
//!
//! Each component is an independent capability. An entity carries any
//! subset of them, and game logic checks for presence rather than asking
//! what kind of entity it is.

use serde::{Deserialize, Serialize};

/// Where the entity stands and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub facing_left: bool,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            facing_left: false,
        }
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub const fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }
}

/// Whether the entity obstructs movement and sight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Physics {
    pub blocker: bool,
    pub light_blocker: bool,
}

impl Physics {
    pub const fn new(blocker: bool, light_blocker: bool) -> Self {
        Self {
            blocker,
            light_blocker,
        }
    }

    /// Blocks both movement and sight
    pub const fn solid() -> Self {
        Self::new(true, true)
    }

    pub fn clear(&mut self) {
        self.blocker = false;
        self.light_blocker = false;
    }
}

/// Base attack power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fighter {
    pub power: i32,
}

impl Fighter {
    pub const fn new(power: i32) -> Self {
        Self { power }
    }
}

/// Hit points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub total: i32,
    pub dead: bool,
}

impl Health {
    /// Full health
    pub const fn new(total: i32) -> Self {
        Self {
            current: total,
            total,
            dead: false,
        }
    }

    /// Subtract damage; dies at zero or below
    pub fn take_damage(&mut self, damage: i32) {
        self.current -= damage;
        if self.current <= 0 {
            self.dead = true;
        }
    }
}

/// Equipment slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    LeftHand,
    RightHand,
}

/// A wearable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub slot: Slot,
    pub power_bonus: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, slot: Slot, power_bonus: i32) -> Self {
        Self {
            name: name.into(),
            slot,
            power_bonus,
        }
    }
}

/// Items currently worn, one per slot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub left_hand: Option<Item>,
    pub right_hand: Option<Item>,
}

impl Equipment {
    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Item> {
        match slot {
            Slot::LeftHand => &mut self.left_hand,
            Slot::RightHand => &mut self.right_hand,
        }
    }

    /// Put an item in its slot, returning whatever was there before
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        self.slot_mut(item.slot).replace(item)
    }

    /// Empty a slot
    pub fn unequip(&mut self, slot: Slot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    /// Sum of all worn items' power bonuses
    pub fn power_bonus(&self) -> i32 {
        [&self.left_hand, &self.right_hand]
            .into_iter()
            .flatten()
            .map(|item| item.power_bonus)
            .sum()
    }
}

/// Door state; only door entities carry it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Door {
    pub opened: bool,
}

/// How the entity is drawn: a glyph for text front ends and a sprite per facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub glyph: char,
    pub sprite_right: u16,
    pub sprite_left: u16,
}

impl Appearance {
    pub const fn new(glyph: char, sprite_right: u16, sprite_left: u16) -> Self {
        Self {
            glyph,
            sprite_right,
            sprite_left,
        }
    }

    /// Same sprite whichever way the entity faces
    pub const fn symmetric(glyph: char, sprite: u16) -> Self {
        Self::new(glyph, sprite, sprite)
    }

    pub const fn sprite(&self, facing_left: bool) -> u16 {
        if facing_left {
            self.sprite_left
        } else {
            self.sprite_right
        }
    }
}
