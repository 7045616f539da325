//! Wall autotiling
//!
//! Walls pick their sprite from the pattern of explored floor around them,
//! so a wall only takes its edge or corner shape once the floor next to it
//! has been seen.

mod catalogue;
mod neighbors;

use log::trace;

pub use catalogue::{ERROR_BITMASK, WallCategory, WallTile, known_bitmasks, resolve_wall_tile};
pub use neighbors::{Neighbors, wall_bitmask};

use crate::dungeon::Tile;
use crate::grid::{Rect, TileGrid};
use crate::rng::GameRng;

/// Recompute the bitmask and category of every wall in `area`
/// (the whole grid when `None`).
///
/// The stored bitmask is always refreshed. The sprite variant is re-rolled
/// only when the category changes, so equivalent walls do not flicker
/// between variants from one turn to the next. Returns how many walls
/// changed category.
pub fn recalculate_wall_adjacency(
    grid: &mut TileGrid<Tile>,
    area: Option<Rect>,
    rng: &mut GameRng,
) -> usize {
    let area = area.map_or(grid.bounds(), |r| r.intersection(&grid.bounds()));
    let mut changed = 0;

    for (x, y) in area.cells() {
        if !grid.get(x, y).is_some_and(Tile::is_wall) {
            continue;
        }
        let bitmask = wall_bitmask(grid, x, y);
        let resolved = resolve_wall_tile(u32::from(bitmask.bits()));

        let Some(tile) = grid.get_mut(x, y) else {
            continue;
        };
        tile.bitmask = bitmask.bits();
        if tile.category != Some(resolved.category) {
            tile.category = Some(resolved.category);
            tile.variant = rng.choose(resolved.variants).copied();
            changed += 1;
        }
    }

    trace!("recalculated walls in {area:?}: {changed} changed category");
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Layout, tiles_from_layout};

    fn room() -> TileGrid<Tile> {
        let layout = Layout::from_ascii(
            "
            #######
            #.....#
            #.....#
            #######
            ",
        );
        let mut grid = tiles_from_layout(&layout);
        for y in 0..4 {
            for x in 0..7 {
                grid.get_mut(x, y).unwrap().explored = true;
            }
        }
        grid
    }

    fn snapshot(grid: &TileGrid<Tile>) -> Vec<(u8, Option<WallCategory>, Option<u16>)> {
        grid.iter()
            .map(|(_, t)| (t.bitmask, t.category, t.variant))
            .collect()
    }

    #[test]
    fn test_resolves_every_wall() {
        let mut grid = room();
        let mut rng = GameRng::new(1);
        let changed = recalculate_wall_adjacency(&mut grid, None, &mut rng);
        assert_eq!(changed, 7 * 4 - 10);

        for (_, tile) in grid.iter() {
            if tile.is_wall() {
                let category = tile.category.unwrap();
                let entry = resolve_wall_tile(u32::from(tile.bitmask));
                assert_eq!(category, entry.category);
                assert!(entry.variants.contains(&tile.variant.unwrap()));
            } else {
                assert_eq!(tile.category, None);
            }
        }

        // corner (0, 0) only touches floor diagonally: south-east
        assert_eq!(grid.get(0, 0).unwrap().bitmask, Neighbors::SOUTH_EAST.bits());
        assert_eq!(
            grid.get(0, 0).unwrap().category,
            Some(WallCategory::WallContinueRightCorner)
        );
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let mut grid = room();
        let mut rng = GameRng::new(2);
        recalculate_wall_adjacency(&mut grid, None, &mut rng);
        let first = snapshot(&grid);
        assert_eq!(recalculate_wall_adjacency(&mut grid, None, &mut rng), 0);
        assert_eq!(snapshot(&grid), first);
    }

    #[test]
    fn test_only_touches_area() {
        let mut grid = room();
        let mut rng = GameRng::new(3);
        recalculate_wall_adjacency(&mut grid, Some(Rect::new(0, 0, 2, 2)), &mut rng);
        assert!(grid.get(0, 0).unwrap().category.is_some());
        assert!(grid.get(1, 0).unwrap().category.is_some());
        assert!(grid.get(2, 0).unwrap().category.is_none());
        assert!(grid.get(0, 3).unwrap().category.is_none());
    }

    #[test]
    fn test_area_is_clamped_to_grid() {
        let mut grid = room();
        let mut rng = GameRng::new(4);
        let changed =
            recalculate_wall_adjacency(&mut grid, Some(Rect::new(-10, -10, 100, 100)), &mut rng);
        assert_eq!(changed, 18);
    }

    #[test]
    fn test_bitmask_updates_without_category_change() {
        let mut grid = TileGrid::filled(3, 3, Tile::wall());
        let mut rng = GameRng::new(5);
        // north-west floor alone resolves to pillar_left
        grid.set(0, 0, Tile { explored: true, ..Tile::floor() });
        recalculate_wall_adjacency(&mut grid, None, &mut rng);
        let centre = *grid.get(1, 1).unwrap();
        assert_eq!(centre.category, Some(WallCategory::PillarLeft));

        // adding north makes 17, which is a plain wall
        grid.set(1, 0, Tile { explored: true, ..Tile::floor() });
        recalculate_wall_adjacency(&mut grid, None, &mut rng);
        let centre = *grid.get(1, 1).unwrap();
        assert_eq!(centre.bitmask, 17);
        assert_eq!(centre.category, Some(WallCategory::Wall));

        // adding north-east gives 49, still a plain wall: variant is kept
        grid.set(2, 0, Tile { explored: true, ..Tile::floor() });
        let variant_before = grid.get(1, 1).unwrap().variant;
        recalculate_wall_adjacency(&mut grid, None, &mut rng);
        let centre = *grid.get(1, 1).unwrap();
        assert_eq!(centre.bitmask, 49);
        assert_eq!(centre.category, Some(WallCategory::Wall));
        assert_eq!(centre.variant, variant_before);
    }
}
