//! Level population
//!
//! Places the player in the first room, a closed door on every doorway
//! and one spider in each of the other rooms.

use log::debug;

use super::Layout;
use crate::consts::{
    RENDER_ORDER_CREATURE, RENDER_ORDER_FIXTURE, S_DOOR_CLOSED, S_PLAYER, S_SPIDER,
    SPRITE_DOOR_CLOSED, SPRITE_PLAYER_LEFT, SPRITE_PLAYER_RIGHT, SPRITE_SPIDER_LEFT,
    SPRITE_SPIDER_RIGHT,
};
use crate::entity::{Appearance, Entity, EntityId, Item, Physics, Slot};

/// The player: power 1, 10 hit points and a +2 weapon in the right hand
pub fn make_player(x: i32, y: i32) -> Entity {
    Entity::new("player")
        .with_render_order(RENDER_ORDER_CREATURE)
        .with_position(x, y)
        .with_appearance(Appearance::new(
            S_PLAYER,
            SPRITE_PLAYER_RIGHT,
            SPRITE_PLAYER_LEFT,
        ))
        .with_fighter(1)
        .with_health(10)
        .with_item(Item::new("dagger", Slot::RightHand, 2))
}

/// A spider: blocks movement but not sight, 10 hit points, harmless
pub fn make_spider(x: i32, y: i32) -> Entity {
    Entity::new("spider")
        .enemy()
        .with_render_order(RENDER_ORDER_CREATURE)
        .with_position(x, y)
        .with_appearance(Appearance::new(
            S_SPIDER,
            SPRITE_SPIDER_RIGHT,
            SPRITE_SPIDER_LEFT,
        ))
        .with_physics(Physics::new(true, false))
        .with_fighter(0)
        .with_health(10)
}

/// A closed door
pub fn make_door(x: i32, y: i32) -> Entity {
    Entity::new("door")
        .with_render_order(RENDER_ORDER_FIXTURE)
        .with_position(x, y)
        .with_appearance(Appearance::symmetric(S_DOOR_CLOSED, SPRITE_DOOR_CLOSED))
        .with_physics(Physics::solid())
        .with_door(false)
}

/// Create the entities for a freshly generated level.
///
/// The player is always entity 0. A doorway shared by two rooms gets a
/// single door.
pub fn populate(layout: &Layout) -> (Vec<Entity>, EntityId) {
    let (px, py) = layout.rooms.first().map_or((0, 0), |r| r.center);
    let mut entities = vec![make_player(px, py)];
    let player = EntityId(0);

    for (i, room) in layout.rooms.iter().enumerate() {
        for (x, y) in room.doors() {
            if entities.iter().any(|e| e.is_at(x, y)) {
                continue;
            }
            entities.push(make_door(x, y));
        }

        if i > 0 {
            let (x, y) = room.center;
            entities.push(make_spider(x, y));
        }
    }

    debug!(
        "populated level: {} rooms, {} entities",
        layout.rooms.len(),
        entities.len()
    );
    (entities, player)
}
