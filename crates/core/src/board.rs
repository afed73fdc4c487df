//! Board module - the fixed-size playfield
//!
//! The board has no cell storage of its own: the snake and the food are the
//! only occupants, so the board only answers geometric questions.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom).

use crate::types::{Point, BOARD_HEIGHT, BOARD_WIDTH};

/// The playfield dimensions. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    /// Create a board of `width` x `height` cells. Each edge is at least 1.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Get width of the board
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check if `p` lies on the board
    #[inline(always)]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The start cell for a new snake.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
