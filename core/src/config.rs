use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Share of interior cells turned into bombs when nothing else is asked for.
pub const DEFAULT_BOMB_PERCENTAGE: f64 = 0.2;

/// How many bombs to place, either outright or as a share of the interior.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BombDensity {
    Count(CellCount),
    Percentage(f64),
}

impl BombDensity {
    /// Picks between the mutually exclusive count and percentage options.
    pub fn from_options(count: Option<CellCount>, percentage: Option<f64>) -> Result<Self> {
        match (count, percentage) {
            (Some(_), Some(_)) => Err(GameError::ConflictingBombDensity),
            (Some(count), None) => Ok(Self::Count(count)),
            (None, Some(percentage)) => Ok(Self::Percentage(percentage)),
            (None, None) => Ok(Self::default()),
        }
    }

    /// Bomb count for a board with `interior` cells off the outer ring.
    pub fn resolve(self, interior: CellCount) -> Result<CellCount> {
        match self {
            Self::Count(count) if count > interior => Err(GameError::TooManyBombs {
                requested: count,
                capacity: interior,
            }),
            Self::Count(count) => Ok(count),
            Self::Percentage(percentage) if (0.0..=1.0).contains(&percentage) => {
                // truncates, never above `interior`
                Ok((interior as f64 * percentage) as CellCount)
            }
            Self::Percentage(_) => Err(GameError::InvalidBombPercentage),
        }
    }
}

impl Default for BombDensity {
    fn default() -> Self {
        Self::Percentage(DEFAULT_BOMB_PERCENTAGE)
    }
}

/// Play style.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Cursor moves freely, cells are revealed on request.
    #[default]
    Standard,
    /// Every step reveals the cell stepped on, flagged cells block the way.
    Soldier,
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "standard" | "default" => Ok(Self::Standard),
            "soldier" => Ok(Self::Soldier),
            _ => Err(UnknownMode),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::Soldier => "soldier",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode, expected `standard` or `soldier`")]
pub struct UnknownMode;

/// Validated settings for one or more games.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    size: Coord2,
    bombs: CellCount,
    pub mode: Mode,
}

impl GameConfig {
    pub fn new(size: Coord2, density: BombDensity, mode: Mode) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        let bombs = density.resolve(interior_cells(size))?;
        if bombs > 0 && bombs == interior_cells(size) {
            log::warn!("Every interior cell holds a bomb, only the border is safe");
        }
        Ok(Self { size, bombs, mode })
    }

    /// Rejects boards that would not fit a display of `bound` cells.
    pub fn fit_display(self, bound: Coord2) -> Result<Self> {
        if self.size.0 > bound.0 || self.size.1 > bound.1 {
            Err(GameError::ExceedsDisplay {
                size: self.size,
                bound,
            })
        } else {
            Ok(self)
        }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn bomb_count(&self) -> CellCount {
        self.bombs
    }

    pub const fn interior_cells(&self) -> CellCount {
        interior_cells(self.size)
    }
}
