//! Fixed-size 2D grid and half-open rectangles over it.
//!
//! Coordinates are signed so that callers can probe neighbors of edge
//! cells without special cases: anything outside the grid is simply
//! absent.

use serde::{Deserialize, Serialize};

/// A rectangular, row-major grid of cells.
///
/// The grid never resizes. Reads outside `[0, width) × [0, height)`
/// return `None`, writes outside it are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Default> TileGrid<T> {
    /// Create a grid with every cell set to `T::default()`
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| T::default())
    }
}

impl<T: Clone> TileGrid<T> {
    /// Create a grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl<T> TileGrid<T> {
    /// Create a grid by calling `f(x, y)` for every cell
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Get the cell at (x, y), or `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get the cell at (x, y) mutably, or `None` outside the grid
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at (x, y). Returns false (and does nothing) outside the grid.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero chunk size
        self.cells.chunks(self.width.max(1))
    }

    /// Iterate over every cell with its coordinate
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &T)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (((i % width) as i32, (i / width) as i32), cell))
    }

    /// The rectangle covering the whole grid
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

/// A half-open rectangle `[x1, x2) × [y1, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// A `width × height` rectangle centred on (cx, cy), grown by `margin` on every side
    pub fn around(cx: i32, cy: i32, width: i32, height: i32, margin: i32) -> Self {
        let x1 = cx - width / 2 - margin;
        let y1 = cy - height / 2 - margin;
        Self::new(x1, y1, x1 + width + 2 * margin, y1 + height + 2 * margin)
    }

    pub fn width(&self) -> i32 {
        (self.x2 - self.x1).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.y2 - self.y1).max(0)
    }

    /// Check if the rectangle has no cells
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// Overlap of two rectangles (possibly empty)
    pub fn intersection(&self, other: &Rect) -> Rect {
        Rect {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        }
    }

    /// Iterate over every coordinate, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let Rect { x1, y1, x2, y2 } = *self;
        (y1..y2).flat_map(move |y| (x1..x2).map(move |x| (x, y)))
    }
}
