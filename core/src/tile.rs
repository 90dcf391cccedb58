use serde::{Deserialize, Serialize};

/// Actual content of a cell, fixed once the minefield is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Bomb,
    Empty,
    Numbered(u8),
}

impl Cell {
    /// Cell value for a safe cell with `adjacent_bombs` bombs around it.
    pub const fn from_adjacent(adjacent_bombs: u8) -> Self {
        match adjacent_bombs {
            0 => Self::Empty,
            n => Self::Numbered(n),
        }
    }

    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Numbered(n) => Some(n),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

/// What the player has been shown of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Flagged,
    Revealed(Cell),
}

impl Visibility {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}
