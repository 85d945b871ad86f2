use std::ops::Add;

use crate::error::Error;
use crate::vector::Vector;

/// A unit step on the grid: one of the eight compass directions, or `Stay`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
    Stay,
}

impl Direction {
    pub const ALL: [Direction; 9] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Stay,
    ];

    pub fn vector(self) -> Vector {
        use Direction::*;

        match self {
            Up => Vector::new(0, 1),
            Down => Vector::new(0, -1),
            Left => Vector::new(-1, 0),
            Right => Vector::new(1, 0),
            UpRight => Vector::new(1, 1),
            UpLeft => Vector::new(-1, 1),
            DownRight => Vector::new(1, -1),
            DownLeft => Vector::new(-1, -1),
            Stay => Vector::new(0, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        let Vector { x, y } = self.vector();
        Direction::from_signum(Vector::new(-x, -y))
    }

    /// Adds both unit vectors and reduces the sum back to a unit step, so
    /// `Up + Up` is `Up` and `Up + Down` is `Stay`.
    pub fn compose(self, other: Direction) -> Direction {
        Direction::from_signum(self.vector() + other.vector())
    }

    /// Direction of the sign-reduced `v`.
    pub(crate) fn from_signum(v: Vector) -> Direction {
        match Direction::try_from(v.signum()) {
            Ok(direction) => direction,
            Err(e) => unreachable!("signum produced a non-unit vector: {}", e),
        }
    }
}

impl TryFrom<Vector> for Direction {
    type Error = Error;

    fn try_from(v: Vector) -> Result<Direction, Error> {
        use Direction::*;

        let direction = match (v.x, v.y) {
            (0, 1) => Up,
            (0, -1) => Down,
            (-1, 0) => Left,
            (1, 0) => Right,
            (1, 1) => UpRight,
            (-1, 1) => UpLeft,
            (1, -1) => DownRight,
            (-1, -1) => DownLeft,
            (0, 0) => Stay,
            _ => return Err(Error::NotUnitVector(v)),
        };

        Ok(direction)
    }
}

impl Add for Direction {
    type Output = Direction;

    fn add(self, other: Direction) -> Direction {
        self.compose(other)
    }
}
