use dc_core::action::{Direction, TurnOutcome, resolve_player_turn};
use dc_core::autotile::{Neighbors, wall_bitmask};
use dc_core::dungeon::{Layout, Tile, make_door, make_player, make_spider};
use dc_core::entity::EntityId;
use dc_core::grid::TileGrid;
use dc_core::{GameConfig, GameRng, GameState};

fn open_room() -> TileGrid<Tile> {
    TileGrid::filled(6, 6, Tile::floor())
}

#[test]
fn test_north_and_east_floor_gives_three() {
    let mut grid = TileGrid::filled(3, 3, Tile::wall());
    grid.set(1, 0, Tile { explored: true, ..Tile::floor() });
    grid.set(2, 1, Tile { explored: true, ..Tile::floor() });
    // unexplored floor does not count
    grid.set(1, 2, Tile::floor());
    let mask = wall_bitmask(&grid, 1, 1);
    assert_eq!(mask, Neighbors::NORTH | Neighbors::EAST);
    assert_eq!(mask.bits(), 3);
}

#[test]
fn test_door_wins_over_spider_on_same_cell() {
    let grid = open_room();
    let mut entities = vec![make_player(2, 2), make_spider(3, 2), make_door(3, 2)];
    let outcome = resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::East);
    assert_eq!(outcome, TurnOutcome::DoorOpened(EntityId(2)));
    assert!(entities[0].is_at(2, 2));
    assert_eq!(entities[1].health.unwrap().current, 10);
}

#[test]
fn test_spider_fight() {
    let grid = open_room();
    let mut entities = vec![make_player(2, 2), make_spider(2, 3)];
    let mut hp = Vec::new();
    for _ in 0..4 {
        resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::South);
        hp.push(entities[1].health.unwrap().current);
    }
    assert_eq!(hp, vec![7, 4, 1, -2]);
    assert!(entities[1].is_dead());
    assert!(!entities[1].blocks_movement());
    assert!(entities[0].is_at(2, 2));
}

#[test]
fn test_move_off_left_edge_is_clamped() {
    let grid = open_room();
    let mut entities = vec![make_player(0, 3)];
    resolve_player_turn(&mut entities, &grid, EntityId(0), Direction::West);
    let pos = entities[0].position.unwrap();
    assert_eq!((pos.x, pos.y), (0, 3));
    assert!(pos.facing_left);
}

#[test]
fn test_explored_walls_take_shape() {
    let layout = Layout::from_ascii(
        "
        #####
        #...#
        #...#
        #####
        ",
    )
    .with_room((2, 1), vec![]);
    let game = GameState::new(&layout, GameConfig::default(), GameRng::new(7));
    assert_eq!(game.entities.len(), 1);

    // every wall touches some explored floor, so none is left unresolved
    for ((x, y), tile) in game.tiles.iter() {
        if tile.is_wall() {
            assert!(tile.category.is_some(), "wall at ({x}, {y})");
            assert!(tile.variant.is_some(), "wall at ({x}, {y})");
        }
    }
    let top = game.tiles.get(2, 0).unwrap();
    assert_eq!(
        top.bitmask,
        (Neighbors::SOUTH | Neighbors::SOUTH_WEST | Neighbors::SOUTH_EAST).bits()
    );
}

#[test]
fn test_same_seed_same_game() {
    let layout = Layout::from_ascii(
        "
        ########
        #......#
        #......#
        ########
        ",
    )
    .with_room((2, 1), vec![]);
    let mut a = GameState::new(&layout, GameConfig::default(), GameRng::new(3));
    let mut b = GameState::new(&layout, GameConfig::default(), GameRng::new(3));
    for dir in [Direction::East, Direction::East, Direction::South, Direction::West] {
        assert_eq!(a.step(dir), b.step(dir));
    }
    assert_eq!(a.tiles, b.tiles);
    assert_eq!(a.entities, b.entities);
}
