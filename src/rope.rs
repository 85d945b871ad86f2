use std::fmt;

use itertools::Itertools;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::vector::Position;

/// A chain of knots, head first. Every knot touches the one ahead of it.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Rope {
    knots: Vec<Position>,
}

impl Rope {
    /// A rope of `len` knots, all at the origin.
    pub fn new(len: usize) -> Result<Rope> {
        if len == 0 {
            return Err(Error::EmptyRope);
        }

        let knots = std::iter::repeat(Position::default()).take(len).collect();
        Ok(Rope { knots })
    }

    /// Moves the head by one unit step and pulls the rest of the chain along,
    /// front to back, each knot following its already-moved leader.
    pub fn step(&mut self, direction: Direction) {
        let mut iter = self.knots.iter_mut();
        let Some(head) = iter.next() else { return };
        head.step(direction);

        let mut prev = *head;
        for knot in iter {
            knot.follow(&prev);
            prev = *knot;
        }

        assert!(self.is_connected(), "rope came apart: {}", self);
    }

    pub fn is_connected(&self) -> bool {
        self.knots
            .iter()
            .tuple_windows()
            .all(|(leader, follower)| leader.is_adjacent(follower))
    }

    pub fn head(&self) -> Position {
        self.knots[0]
    }

    pub fn tail(&self) -> Position {
        self.knots[self.knots.len() - 1]
    }

    pub fn knots(&self) -> &[Position] {
        &self.knots
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.knots.iter().join(" - "))
    }
}
