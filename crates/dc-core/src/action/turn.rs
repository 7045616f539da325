//! Player turn resolution
//!
//! Bumping into a cell does exactly one thing, checked in this order:
//! open a closed door, attack a living enemy, stop at anything else that
//! blocks, or step onto open floor.

use log::debug;
use serde::{Deserialize, Serialize};

use super::Direction;
use crate::consts::{RENDER_ORDER_CORPSE, S_DOOR_OPEN, SPRITE_DOOR_OPENED};
use crate::dungeon::Tile;
use crate::entity::{Appearance, Entity, EntityId, entities_at};
use crate::grid::TileGrid;

/// What a player turn did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// No direction given, nothing happened
    Idle,
    /// A closed door was opened; the player did not move
    DoorOpened(EntityId),
    /// An enemy was hit; the player did not move
    Attacked {
        target: EntityId,
        damage: i32,
        killed: bool,
    },
    /// Something solid is in the way
    Blocked,
    /// The player stepped to (x, y)
    Moved { x: i32, y: i32 },
}

/// Apply one directional input from `player`.
///
/// The destination is clamped to the grid, so the player can never leave
/// it; a clamped step that lands back on the player's own cell is
/// `Blocked`. Facing is updated for any input with a horizontal component,
/// including attacks and bumps.
pub fn resolve_player_turn(
    entities: &mut [Entity],
    grid: &TileGrid<Tile>,
    player: EntityId,
    direction: Direction,
) -> TurnOutcome {
    let (dx, dy) = direction.delta();
    if dx == 0 && dy == 0 {
        return TurnOutcome::Idle;
    }
    let Some(pos) = entities.get(player.0).and_then(|e| e.position) else {
        return TurnOutcome::Idle;
    };

    let max_x = (grid.width() as i32 - 1).max(0);
    let max_y = (grid.height() as i32 - 1).max(0);
    let nx = (pos.x + dx).clamp(0, max_x);
    let ny = (pos.y + dy).clamp(0, max_y);

    if dx != 0
        && let Some(p) = entities[player.0].position.as_mut()
    {
        p.facing_left = dx < 0;
    }

    let occupants: Vec<EntityId> = entities_at(entities, nx, ny)
        .filter(|&id| id != player)
        .collect();

    if let Some(door) = occupants
        .iter()
        .copied()
        .find(|id| entities[id.0].is_closed_door())
    {
        open_door(&mut entities[door.0]);
        debug!("door {door:?} at ({nx}, {ny}) opened");
        return TurnOutcome::DoorOpened(door);
    }

    if let Some(target) = occupants
        .iter()
        .copied()
        .find(|id| entities[id.0].is_living_enemy())
    {
        let damage = entities[player.0].attack_power();
        let killed = hit(&mut entities[target.0], damage);
        debug!("{target:?} hit for {damage}, killed: {killed}");
        return TurnOutcome::Attacked {
            target,
            damage,
            killed,
        };
    }

    if occupants.iter().any(|id| entities[id.0].blocks_movement()) {
        return TurnOutcome::Blocked;
    }

    let open = grid.get(nx, ny).is_some_and(|t| !t.blocker);
    if !open || (nx, ny) == (pos.x, pos.y) {
        return TurnOutcome::Blocked;
    }

    if let Some(p) = entities[player.0].position.as_mut() {
        p.move_to(nx, ny);
    }
    TurnOutcome::Moved { x: nx, y: ny }
}

/// Swing a closed door open: it stops blocking and shows its open sprite
fn open_door(door: &mut Entity) {
    if let Some(state) = door.door.as_mut() {
        state.opened = true;
    }
    if let Some(physics) = door.physics.as_mut() {
        physics.clear();
    }
    door.appearance = Some(Appearance::symmetric(S_DOOR_OPEN, SPRITE_DOOR_OPENED));
}

/// Deal damage; on death the target stops blocking and is no longer drawn.
/// Returns whether this hit killed it.
fn hit(target: &mut Entity, damage: i32) -> bool {
    let Some(health) = target.health.as_mut() else {
        return false;
    };
    health.take_damage(damage);
    if !health.dead {
        return false;
    }

    if let Some(physics) = target.physics.as_mut() {
        physics.clear();
    }
    target.appearance = None;
    target.render_order = RENDER_ORDER_CORPSE;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Layout, make_door, make_player, make_spider, tiles_from_layout};

    fn arena() -> TileGrid<Tile> {
        tiles_from_layout(&Layout::from_ascii(
            "
            .......
            .......
            ...#...
            .......
            ",
        ))
    }

    #[test]
    fn test_stay_is_idle() {
        let grid = arena();
        let mut entities = vec![make_player(1, 1)];
        let before = entities.clone();
        let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::Stay);
        assert_eq!(outcome, TurnOutcome::Idle);
        assert_eq!(entities, before);
    }

    #[test]
    fn test_move_and_facing() {
        let grid = arena();
        let mut entities = vec![make_player(1, 1)];
        let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::West);
        assert_eq!(outcome, TurnOutcome::Moved { x: 0, y: 1 });
        assert!(entities[0].position.unwrap().facing_left);

        // vertical moves keep facing
        resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::South);
        assert!(entities[0].position.unwrap().facing_left);

        resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::NorthEast);
        let pos = entities[0].position.unwrap();
        assert!(!pos.facing_left);
        assert_eq!((pos.x, pos.y), (1, 1));
    }

    #[test]
    fn test_wall_blocks() {
        let grid = arena();
        let mut entities = vec![make_player(3, 1)];
        let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::South);
        assert_eq!(outcome, TurnOutcome::Blocked);
        assert!(entities[0].is_at(3, 1));
    }

    #[test]
    fn test_clamped_at_edge() {
        let grid = arena();
        let mut entities = vec![make_player(0, 0)];
        let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::West);
        assert_eq!(outcome, TurnOutcome::Blocked);
        assert!(entities[0].is_at(0, 0));

        // the vertical part of a diagonal still applies
        let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::SouthWest);
        assert_eq!(outcome, TurnOutcome::Moved { x: 0, y: 1 });
    }

    #[test]
    fn test_door_opens_before_anything_else() {
        let grid = arena();
        let mut entities = vec![make_player(1, 1), make_door(2, 1), make_spider(1, 2)];
        let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::East);
        assert_eq!(outcome, TurnOutcome::DoorOpened(EntityId(1)));
        assert!(entities[0].is_at(1, 1));

        let door = &entities[1];
        assert!(door.door.unwrap().opened);
        assert!(!door.blocks_movement());
        assert!(!door.blocks_light());
        assert_eq!(door.sprite(), Some(SPRITE_DOOR_OPENED));

        // the spider was untouched
        assert_eq!(entities[2].health.unwrap().current, 10);

        // next bump walks through the open door
        let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::East);
        assert_eq!(outcome, TurnOutcome::Moved { x: 2, y: 1 });
    }

    #[test]
    fn test_attack_until_dead() {
        let grid = arena();
        let mut entities = vec![make_player(1, 1), make_spider(2, 1)];
        let expected = [(7, false), (4, false), (1, false), (-2, true)];
        for (hp, killed) in expected {
            let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::East);
            assert_eq!(
                outcome,
                TurnOutcome::Attacked {
                    target: EntityId(1),
                    damage: 3,
                    killed,
                }
            );
            assert_eq!(entities[1].health.unwrap().current, hp);
            assert!(entities[0].is_at(1, 1));
        }

        let corpse = &entities[1];
        assert!(corpse.is_dead());
        assert!(!corpse.physics.unwrap().blocker);
        assert!(corpse.appearance.is_none());
        assert_eq!(corpse.render_order, RENDER_ORDER_CORPSE);

        // the corpse no longer blocks
        let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::East);
        assert_eq!(outcome, TurnOutcome::Moved { x: 2, y: 1 });
        assert_eq!(entities[1].health.unwrap().current, -2);
    }

    #[test]
    fn test_other_blockers_reject() {
        let grid = arena();
        let statue = Entity::new("statue")
            .with_position(2, 1)
            .with_physics(crate::entity::Physics::solid());
        let mut entities = vec![make_player(1, 1), statue];
        let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::East);
        assert_eq!(outcome, TurnOutcome::Blocked);
        assert!(entities[0].is_at(1, 1));
        assert!(!entities[0].position.unwrap().facing_left);
    }
}
