//! Rectangular rooms

use serde::{Deserialize, Serialize};

/// A room's interior; its walls lie one cell outside on every side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of room interior (left edge)
    pub x: usize,
    /// Y coordinate of room interior (top edge)
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if this room overlaps another, with buffer space around both
    pub fn overlaps(&self, other: &Room, buffer: usize) -> bool {
        let x1 = self.x.saturating_sub(buffer);
        let y1 = self.y.saturating_sub(buffer);
        let x2 = self.x + self.width + buffer;
        let y2 = self.y + self.height + buffer;

        let ox1 = other.x.saturating_sub(buffer);
        let oy1 = other.y.saturating_sub(buffer);
        let ox2 = other.x + other.width + buffer;
        let oy2 = other.y + other.height + buffer;

        !(x2 <= ox1 || x1 >= ox2 || y2 <= oy1 || y1 >= oy2)
    }

    pub fn center(&self) -> (i32, i32) {
        (
            (self.x + self.width / 2) as i32,
            (self.y + self.height / 2) as i32,
        )
    }

    /// Check if point is inside room
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x0, y0) = (self.x as i32, self.y as i32);
        x >= x0 && x < x0 + self.width as i32 && y >= y0 && y < y0 + self.height as i32
    }

    /// Cells of the wall ring, excluding corners, each paired with the
    /// step that leads out of the room
    pub fn wall_ring(&self) -> impl Iterator<Item = ((i32, i32), (i32, i32))> + '_ {
        let (x0, y0) = (self.x as i32, self.y as i32);
        let (x1, y1) = (x0 + self.width as i32, y0 + self.height as i32);
        let horizontal = (x0..x1).flat_map(move |x| [((x, y0 - 1), (0, -1)), ((x, y1), (0, 1))]);
        let vertical = (y0..y1).flat_map(move |y| [((x0 - 1, y), (-1, 0)), ((x1, y), (1, 0))]);
        horizontal.chain(vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_overlap() {
        let a = Room::new(2, 2, 3, 3);
        // walls would touch: too close with a buffer of one
        assert!(a.overlaps(&Room::new(6, 2, 3, 3), 1));
        assert!(!a.overlaps(&Room::new(7, 2, 3, 3), 1));
        assert!(!a.overlaps(&Room::new(6, 2, 3, 3), 0));
        assert!(a.overlaps(&Room::new(3, 3, 1, 1), 0));
    }

    #[test]
    fn test_center_and_contains() {
        let room = Room::new(1, 1, 4, 3);
        assert_eq!(room.center(), (3, 2));
        assert!(room.contains(1, 1));
        assert!(room.contains(4, 3));
        assert!(!room.contains(5, 3));
        assert!(!room.contains(0, 1));
    }

    #[test]
    fn test_wall_ring() {
        let room = Room::new(1, 1, 2, 1);
        let ring: Vec<_> = room.wall_ring().collect();
        assert_eq!(
            ring,
            vec![
                ((1, 0), (0, -1)),
                ((1, 2), (0, 1)),
                ((2, 0), (0, -1)),
                ((2, 2), (0, 1)),
                ((0, 1), (-1, 0)),
                ((3, 1), (1, 0)),
            ]
        );
    }
}
