#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod config;
mod engine;
mod error;
mod generator;
mod grid;
mod session;
mod tile;
mod types;

/// Feedback for audio/visual collaborators, emitted as play goes on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CellRevealedEmpty,
    CellRevealedNumber(u8),
    BombDetonated,
    GameWon,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Detonated,
    Won,
}

/// Merges outcomes when several cells are revealed at once.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (Detonated, _) => Detonated,
            (_, Detonated) => Detonated,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The cursor stayed put.
    Blocked,
    /// The cursor moved; in soldier mode the step also revealed the new cell.
    Moved(RevealOutcome),
}
