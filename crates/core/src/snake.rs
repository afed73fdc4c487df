//! Snake module - the ordered body of the snake
//!
//! Segments are stored head first. Advancing pushes a new head and drops the
//! tail, which is the same as every segment taking its predecessor's old
//! position at once.

use std::collections::{vec_deque, VecDeque};

use crate::types::{Direction, Point};

/// The snake body. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Head at the front, tail at the back
    body: VecDeque<Point>,
}

#[allow(clippy::len_without_is_empty)]
impl Snake {
    /// Create a snake of `len` segments (at least one), all on `start`.
    pub fn new(start: Point, len: usize) -> Self {
        let len = len.max(1);
        let mut body = VecDeque::with_capacity(len + 8);
        body.extend(std::iter::repeat(start).take(len));
        Self { body }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_segments(segments: &[Point]) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            body: segments.iter().copied().collect(),
        })
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Segments from head to tail.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Borrowing iterator over the segments, head first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Point> {
        self.body.iter()
    }

    /// Move one cell in `direction` and return the new head.
    ///
    /// Length is unchanged.
    pub fn advance(&mut self, direction: Direction) -> Point {
        let new_head = self.head().step(direction);
        self.body.pop_back();
        self.body.push_front(new_head);
        new_head
    }

    /// Append one segment on top of the tail.
    ///
    /// The next `advance` moves the old tail forward and leaves the new
    /// segment where the tail used to be.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push_back(tail);
    }

    /// Check if the head shares a cell with any other segment
    pub fn collides_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&p| p == head)
    }

    /// Check if any segment is on `p`
    pub fn occupies(&self, p: Point) -> bool {
        self.body.iter().any(|&s| s == p)
    }
}
