//! Food placement - picks a free cell uniformly at random
//!
//! Placement first rejection-samples random cells, which is fast while the
//! snake is small. After `FOOD_SAMPLE_ATTEMPTS` misses it scans the board for
//! free cells and picks one of those, so a nearly full board still terminates
//! with a uniform choice. A completely full board yields `None`.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::snake::Snake;
use crate::types::{Point, FOOD_SAMPLE_ATTEMPTS};

/// A set-like collection of occupied cells.
pub trait Occupancy {
    fn is_occupied(&self, p: Point) -> bool;
}

impl Occupancy for Snake {
    fn is_occupied(&self, p: Point) -> bool {
        self.occupies(p)
    }
}

impl Occupancy for [Point] {
    fn is_occupied(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Occupancy for Vec<Point> {
    fn is_occupied(&self, p: Point) -> bool {
        self.as_slice().is_occupied(p)
    }
}

impl Occupancy for HashSet<Point> {
    fn is_occupied(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

/// Choose a cell of `board` that `occupied` does not cover.
pub fn place_food<O, R>(board: &Board, occupied: &O, rng: &mut R) -> Option<Point>
where
    O: Occupancy + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let p = Point::new(
            rng.gen_range(0..board.width()),
            rng.gen_range(0..board.height()),
        );
        if !occupied.is_occupied(p) {
            return Some(p);
        }
    }

    let free: Vec<Point> = board
        .cells()
        .filter(|&p| !occupied.is_occupied(p))
        .collect();
    free.choose(rng).copied()
}
