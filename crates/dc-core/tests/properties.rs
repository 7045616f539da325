use dc_core::GameRng;
use dc_core::autotile::{WallCategory, known_bitmasks, recalculate_wall_adjacency, resolve_wall_tile};
use dc_core::dungeon::Tile;
use dc_core::grid::TileGrid;
use dc_core::vision::compute_visibility;
use proptest::collection::vec;
use proptest::prelude::*;

/// A random grid of walls and floors, some of them already explored
fn arb_grid() -> impl Strategy<Value = TileGrid<Tile>> {
    (3usize..14, 3usize..14).prop_flat_map(|(w, h)| {
        vec(any::<(bool, bool)>(), w * h).prop_map(move |cells| {
            TileGrid::from_fn(w, h, |x, y| {
                let (floor, explored) = cells[y * w + x];
                let tile = if floor { Tile::floor() } else { Tile::wall() };
                Tile { explored, ..tile }
            })
        })
    })
}

fn explored(grid: &TileGrid<Tile>) -> Vec<bool> {
    grid.iter().map(|(_, t)| t.explored).collect()
}

#[test]
fn test_every_byte_resolves() {
    let known: Vec<u32> = known_bitmasks().collect();
    for mask in 0..=255u32 {
        let tile = resolve_wall_tile(mask);
        assert!(!tile.variants.is_empty(), "mask {mask} has no sprite");
        if !known.contains(&mask) {
            assert_eq!(tile.category, WallCategory::Error);
        }
    }
}

proptest! {
    #[test]
    fn prop_large_bitmasks_are_errors(mask in 256u32..=u32::MAX) {
        prop_assert_eq!(resolve_wall_tile(mask).category, WallCategory::Error);
    }

    #[test]
    fn prop_recalculation_is_idempotent(mut grid in arb_grid(), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        recalculate_wall_adjacency(&mut grid, None, &mut rng);
        let first = grid.clone();
        prop_assert_eq!(recalculate_wall_adjacency(&mut grid, None, &mut rng), 0);
        prop_assert_eq!(grid, first);
    }

    #[test]
    fn prop_explored_never_shrinks(
        mut grid in arb_grid(),
        origins in vec((0i32..14, 0i32..14), 1..6),
    ) {
        let mut before = explored(&grid);
        for (x, y) in origins {
            let visible = compute_visibility(&mut grid, &[], (x, y), 5);
            prop_assert!(visible.contains(x, y));
            let after = explored(&grid);
            for (was, is) in before.iter().zip(&after) {
                prop_assert!(!was || *is);
            }
            before = after;
        }
    }

    #[test]
    fn prop_visibility_is_deterministic(grid in arb_grid(), x in 0i32..14, y in 0i32..14) {
        let mut a = grid.clone();
        let mut b = grid;
        let first = compute_visibility(&mut a, &[], (x, y), 5);
        let second = compute_visibility(&mut b, &[], (x, y), 5);
        prop_assert_eq!(first, second);
        prop_assert_eq!(a, b);
    }
}
