//! Entities: the player, enemies and doors
//!
//! An entity is a bag of optional components. Entities are never removed
//! from the level's collection; dead ones are flagged and ignored, which
//! keeps every `EntityId` a stable index.

mod components;

use serde::{Deserialize, Serialize};

pub use components::{
    Appearance, Door, Equipment, Fighter, Health, Item, Physics, Position, Slot,
};

/// Index of an entity in the level's entity list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub usize);

/// A game entity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Higher values draw on top
    pub render_order: i32,
    pub is_enemy: bool,

    pub position: Option<Position>,
    pub physics: Option<Physics>,
    pub fighter: Option<Fighter>,
    pub health: Option<Health>,
    pub equipment: Option<Equipment>,
    pub appearance: Option<Appearance>,
    pub door: Option<Door>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            render_order: 1,
            ..Self::default()
        }
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    pub fn with_physics(mut self, physics: Physics) -> Self {
        self.physics = Some(physics);
        self
    }

    pub fn with_fighter(mut self, power: i32) -> Self {
        self.fighter = Some(Fighter::new(power));
        self
    }

    pub fn with_health(mut self, total: i32) -> Self {
        self.health = Some(Health::new(total));
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.equipment.get_or_insert_with(Equipment::default).equip(item);
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn with_door(mut self, opened: bool) -> Self {
        self.door = Some(Door { opened });
        self
    }

    pub fn with_render_order(mut self, render_order: i32) -> Self {
        self.render_order = render_order;
        self
    }

    pub fn enemy(mut self) -> Self {
        self.is_enemy = true;
        self
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_some_and(|h| h.dead)
    }

    /// Living enemy that can still be attacked
    pub fn is_living_enemy(&self) -> bool {
        self.is_enemy && self.health.is_some_and(|h| !h.dead)
    }

    /// Door entity that is still shut
    pub fn is_closed_door(&self) -> bool {
        self.door.is_some_and(|d| !d.opened)
    }

    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.position.is_some_and(|p| p.is_at(x, y))
    }

    /// Obstructs movement (dead entities never do)
    pub fn blocks_movement(&self) -> bool {
        !self.is_dead() && self.physics.is_some_and(|p| p.blocker)
    }

    /// Obstructs sight (dead entities never do)
    pub fn blocks_light(&self) -> bool {
        !self.is_dead() && self.physics.is_some_and(|p| p.light_blocker)
    }

    /// Attack power including equipment bonuses
    pub fn attack_power(&self) -> i32 {
        let base = self.fighter.map_or(0, |f| f.power);
        let bonus = self.equipment.as_ref().map_or(0, Equipment::power_bonus);
        base + bonus
    }

    /// Sprite to draw, if the entity is drawn at all
    pub fn sprite(&self) -> Option<u16> {
        let facing_left = self.position.is_some_and(|p| p.facing_left);
        self.appearance.map(|a| a.sprite(facing_left))
    }
}

/// Ids of all entities standing on (x, y)
pub fn entities_at(entities: &[Entity], x: i32, y: i32) -> impl Iterator<Item = EntityId> + '_ {
    entities
        .iter()
        .enumerate()
        .filter(move |(_, e)| e.is_at(x, y))
        .map(|(i, _)| EntityId(i))
}

/// Check if any living entity on (x, y) blocks sight
pub fn light_blocked_at(entities: &[Entity], x: i32, y: i32) -> bool {
    entities.iter().any(|e| e.is_at(x, y) && e.blocks_light())
}
