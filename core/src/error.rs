use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be at least one cell wide and tall")]
    EmptyBoard,
    #[error(
        "Board of {}x{} does not fit the display of {}x{}",
        .size.0, .size.1, .bound.0, .bound.1
    )]
    ExceedsDisplay { size: Coord2, bound: Coord2 },
    #[error("Too many bombs, requested {requested} but only {capacity} interior cells exist")]
    TooManyBombs {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Bomb percentage must be a number between 0 and 1")]
    InvalidBombPercentage,
    #[error("Bomb count and bomb percentage are mutually exclusive")]
    ConflictingBombDensity,
    #[error("Bombs cannot be placed on the outer ring")]
    BombOnBorder,
    #[error("Could not open every enclosure within {attempts} attempts")]
    EnclosureRepairExhausted { attempts: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
