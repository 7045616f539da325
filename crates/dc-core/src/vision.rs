//! Field of view
//!
//! Precise shadowcasting: cells are visited in square rings around the
//! viewer, each cell covering an equal arc of its ring. Opaque cells add
//! their arc to a sorted list of shadow edges, and a cell is visible while
//! any part of its arc is still lit.

use hashbrown::HashSet;

use crate::dungeon::Tile;
use crate::entity::{Entity, light_blocked_at};
use crate::grid::TileGrid;

/// An angle on a ring, as the fraction `.0 / .1` of a full turn
type Angle = (i64, i64);

/// Shadowcasting field of view over an arbitrary transparency predicate
pub struct PreciseShadowcasting<F> {
    light_passes: F,
}

impl<F: Fn(i32, i32) -> bool> PreciseShadowcasting<F> {
    pub fn new(light_passes: F) -> Self {
        Self { light_passes }
    }

    /// Visit every cell visible from (ox, oy) within `radius`.
    ///
    /// The visitor receives the cell, its ring distance, and the lit
    /// fraction of its arc (always > 0). The origin is always visited
    /// first; if it is opaque, nothing else is.
    pub fn compute(&self, ox: i32, oy: i32, radius: u32, mut visit: impl FnMut(i32, i32, u32, f64)) {
        visit(ox, oy, 0, 1.0);
        if !(self.light_passes)(ox, oy) {
            return;
        }

        let mut shadows: Vec<Angle> = Vec::new();
        for r in 1..=radius as i32 {
            let ring = ring(ox, oy, r);
            let count = ring.len() as i64;

            for (i, &(cx, cy)) in ring.iter().enumerate() {
                let i = i as i64;
                let a1 = (if i > 0 { 2 * i - 1 } else { 2 * count - 1 }, 2 * count);
                let a2 = (2 * i + 1, 2 * count);

                let blocks = !(self.light_passes)(cx, cy);
                let visibility = check_visibility(a1, a2, blocks, &mut shadows);
                if visibility > 0.0 {
                    visit(cx, cy, r as u32, visibility);
                }

                // the whole circle is in shadow
                if shadows.len() == 2 && shadows[0].0 == 0 && shadows[1].0 == shadows[1].1 {
                    return;
                }
            }
        }
    }
}

/// Cells at Chebyshev distance `r`, starting at the bottom-left corner and
/// walking up, right, down, then left.
fn ring(cx: i32, cy: i32, r: i32) -> Vec<(i32, i32)> {
    const DIRS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

    let mut cells = Vec::with_capacity(8 * r as usize);
    let (mut x, mut y) = (cx - r, cy + r);
    for (dx, dy) in DIRS {
        for _ in 0..2 * r {
            cells.push((x, y));
            x += dx;
            y += dy;
        }
    }
    cells
}

/// Lit fraction of the arc `[a1, a2]`; updates `shadows` when the cell blocks.
///
/// `shadows` holds alternating shadow start/end angles in ascending order.
fn check_visibility(a1: Angle, a2: Angle, blocks: bool, shadows: &mut Vec<Angle>) -> f64 {
    // arc wraps past zero: split it in two
    if a1.0 > a2.0 {
        let v1 = check_visibility(a1, (a1.1, a1.1), blocks, shadows);
        let v2 = check_visibility((0, 1), a2, blocks, shadows);
        return (v1 + v2) / 2.0;
    }

    // first edge at or after a1
    let mut index1 = 0usize;
    let mut edge1 = false;
    while index1 < shadows.len() {
        let old = shadows[index1];
        let diff = old.0 * a1.1 - a1.0 * old.1;
        if diff >= 0 {
            if diff == 0 && index1 % 2 == 0 {
                edge1 = true;
            }
            break;
        }
        index1 += 1;
    }

    // last edge at or before a2, -1 if none
    let mut index2 = shadows.len() as isize - 1;
    let mut edge2 = false;
    while index2 >= 0 {
        let old = shadows[index2 as usize];
        let diff = a2.0 * old.1 - old.0 * a2.1;
        if diff >= 0 {
            if diff == 0 && index2 % 2 == 1 {
                edge2 = true;
            }
            break;
        }
        index2 -= 1;
    }

    let i1 = index1 as isize;
    let i2 = index2;
    let hidden = (i1 == i2 && (edge1 || edge2))
        || (edge1 && edge2 && i1 + 1 == i2 && i2 % 2 == 1)
        || (i1 > i2 && i1 % 2 == 1);
    if hidden {
        return 0.0;
    }

    let start = index1;
    let remove = (i2 - i1 + 1).max(0) as usize;
    let fraction = |from: Angle, to: Angle| {
        (to.0 * from.1 - from.0 * to.1) as f64 / (from.1 * to.1) as f64
    };

    let visible_length = if remove % 2 == 1 {
        if start % 2 == 1 {
            // a1 is inside a shadow, a2 is lit
            let p = shadows[start];
            if blocks {
                shadows.splice(start..start + remove, [a2]);
            }
            fraction(p, a2)
        } else {
            // a1 is lit, a2 is inside a shadow
            let p = shadows[i2 as usize];
            if blocks {
                shadows.splice(start..start + remove, [a1]);
            }
            fraction(a1, p)
        }
    } else if start % 2 == 1 {
        // both ends in shadow, lit gap in between
        let p1 = shadows[start];
        let p2 = shadows[i2 as usize];
        if blocks {
            shadows.drain(start..start + remove);
        }
        fraction(p1, p2)
    } else {
        // both ends lit
        if blocks {
            shadows.splice(start..start + remove, [a1, a2]);
        }
        return 1.0;
    };

    visible_length / fraction(a1, a2)
}

/// Cells currently in the field of view. Rebuilt from scratch every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    cells: HashSet<(i32, i32)>,
}

impl VisibleSet {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().copied()
    }
}

/// Light passes through a cell that exists, is not an opaque tile, and
/// holds no living light-blocking entity.
pub fn is_transparent(grid: &TileGrid<Tile>, entities: &[Entity], x: i32, y: i32) -> bool {
    grid.get(x, y).is_some_and(|t| !t.light_blocker) && !light_blocked_at(entities, x, y)
}

/// Compute what the viewer at `origin` sees, and mark every seen tile explored.
///
/// Cells just outside the grid can be reported visible (they are opaque,
/// like walls); they have no tile to mark.
pub fn compute_visibility(
    grid: &mut TileGrid<Tile>,
    entities: &[Entity],
    origin: (i32, i32),
    radius: u32,
) -> VisibleSet {
    let mut visible = VisibleSet::default();
    {
        let view = &*grid;
        let fov = PreciseShadowcasting::new(|x, y| is_transparent(view, entities, x, y));
        fov.compute(origin.0, origin.1, radius, |x, y, _, _| {
            visible.cells.insert((x, y));
        });
    }

    for (x, y) in visible.iter() {
        if let Some(tile) = grid.get_mut(x, y) {
            tile.explored = true;
        }
    }
    visible
}
