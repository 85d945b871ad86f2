use crate::vector::Vector;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("a rope needs at least one knot")]
    EmptyRope,

    #[error("{0:?} is not a unit vector")]
    NotUnitVector(Vector),

    #[error("bad input: {0}")]
    Parse(#[from] nom::error::Error<String>),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
