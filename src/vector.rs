use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::direction::Direction;

/// A displacement on the integer grid.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Vector {
    pub x: i64,
    pub y: i64,
}

impl Vector {
    pub const fn new(x: i64, y: i64) -> Vector {
        Vector { x, y }
    }

    /// Reduces each axis to -1, 0 or 1 independently.
    pub fn signum(self) -> Vector {
        Vector {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }

    pub fn chebyshev_len(self) -> i64 {
        i64::max(self.x.abs(), self.y.abs())
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// A point on the unbounded grid. Up is +y, right is +x.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Position {
        Position { x, y }
    }

    pub fn step(&mut self, direction: Direction) {
        *self += direction.vector();
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        (*other - *self).chebyshev_len() <= 1
    }

    pub fn direction_to(&self, other: &Position) -> Direction {
        Direction::from_signum(*other - *self)
    }

    /// Moves one unit step towards `leader` unless already touching it.
    pub fn follow(&mut self, leader: &Position) {
        if !self.is_adjacent(leader) {
            self.step(self.direction_to(leader));
        }
    }
}

impl Add<Vector> for Position {
    type Output = Position;

    fn add(self, v: Vector) -> Position {
        Position {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl AddAssign<Vector> for Position {
    fn add_assign(&mut self, v: Vector) {
        *self = *self + v;
    }
}

impl Sub for Position {
    type Output = Vector;

    fn sub(self, other: Position) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
