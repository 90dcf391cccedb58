use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a game for renderers: everything the player may see, nothing more.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub bomb_count: CellCount,
    pub flag_count: CellCount,
    pub cursor: Coord2,
    pub state: GameState,
    pub mode: Mode,
    pub board: Array2<Visibility>,
}

impl Snapshot {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        Self {
            size: engine.size(),
            bomb_count: engine.bomb_count(),
            flag_count: engine.flag_count(),
            cursor: engine.cursor(),
            state: engine.state(),
            mode: engine.mode(),
            board: engine.board().clone(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Visibility {
        self.board[coords.to_nd_index()]
    }

    /// How many bombs have not been flagged yet, negative when over-flagged.
    pub fn flags_left(&self) -> i64 {
        i64::from(self.bomb_count) - i64::from(self.flag_count)
    }

    pub fn hidden_count(&self) -> usize {
        self.board.iter().filter(|cell| cell.is_hidden()).count()
    }
}
