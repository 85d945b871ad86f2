pub mod direction;
pub mod error;
pub mod parser;
pub mod rope;
pub mod tracker;
pub mod vector;

pub use direction::Direction;
pub use error::{Error, Result};
pub use rope::Rope;
pub use tracker::{simulate, Move, Tracker};
pub use vector::{Position, Vector};
