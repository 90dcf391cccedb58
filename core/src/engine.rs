use alloc::vec::Vec;
use core::ops::BitOr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Ended
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
    /// Player quit
    Ended,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Game was decided by the board, a restart is the only way forward.
    pub const fn is_decided(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Player-facing state machine over a generated minefield.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    minefield: Minefield,
    board: Array2<Visibility>,
    flag_count: CellCount,
    cursor: Coord2,
    mode: Mode,
    state: GameState,
    triggered_bomb: Option<Coord2>,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl PlayEngine {
    /// Starts a game with the border ring, and whatever empty area it touches, already revealed.
    pub fn new(minefield: Minefield, mode: Mode) -> Self {
        let size = minefield.size();
        let mut engine = Self {
            minefield,
            board: Array2::default(size.to_nd_index()),
            flag_count: 0,
            cursor: (0, 0),
            mode,
            state: Default::default(),
            triggered_bomb: None,
            events: Vec::new(),
        };
        engine.reveal_border();
        engine.events.clear();
        engine
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.minefield.bomb_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// How many bombs have not been flagged yet, negative when over-flagged.
    pub fn flags_left(&self) -> i64 {
        i64::from(self.bomb_count()) - i64::from(self.flag_count)
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn board(&self) -> &Array2<Visibility> {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Visibility {
        self.board[coords.to_nd_index()]
    }

    pub fn visibility(&self, coords: Coord2) -> Option<Visibility> {
        self.board.get(coords.to_nd_index()).copied()
    }

    pub fn triggered_bomb(&self) -> Option<Coord2> {
        self.triggered_bomb
    }

    /// Feedback accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if !self.state.is_playing() || self.visibility(coords) != Some(Visibility::Hidden) {
            return NoChange;
        }

        let cell = self.minefield[coords];
        self.board[coords.to_nd_index()] = Visibility::Revealed(cell);

        match cell {
            Cell::Bomb => {
                log::info!("Bomb detonated at {:?}", coords);
                self.triggered_bomb = Some(coords);
                self.state = GameState::Lost;
                self.events.push(GameEvent::BombDetonated);
                Detonated
            }
            Cell::Empty => {
                self.events.push(GameEvent::CellRevealedEmpty);
                self.cascade(coords);
                Revealed
            }
            Cell::Numbered(n) => {
                self.events.push(GameEvent::CellRevealedNumber(n));
                Revealed
            }
        }
    }

    /// Opens the NESW-connected empty area around `seed` plus the numbers bordering it.
    fn cascade(&mut self, seed: Coord2) {
        let minefield = &self.minefield;
        let region = component_from(minefield.size(), Adjacency::Four, seed, |coords| {
            minefield[coords].is_empty()
        });

        let mut opened = 0;
        for &coords in &region {
            opened += usize::from(self.uncover(coords));
            for pos in self.minefield.neighbors(coords, Adjacency::Eight) {
                if self.minefield[pos].number().is_some() {
                    opened += usize::from(self.uncover(pos));
                }
            }
        }
        log::debug!("Cascade from {:?} opened {} more cells", seed, opened);
    }

    /// Shows a hidden safe cell without any follow-up.
    fn uncover(&mut self, coords: Coord2) -> bool {
        let slot = &mut self.board[coords.to_nd_index()];
        if slot.is_hidden() {
            *slot = Visibility::Revealed(self.minefield[coords]);
            true
        } else {
            false
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use MarkOutcome::*;
        use Visibility::*;

        if !self.state.is_playing() {
            return NoChange;
        }

        match self.visibility(coords) {
            Some(Hidden) => {
                self.board[coords.to_nd_index()] = Flagged;
                self.flag_count += 1;
                Changed
            }
            Some(Flagged) => {
                self.board[coords.to_nd_index()] = Hidden;
                self.flag_count -= 1;
                Changed
            }
            Some(Revealed(_)) | None => NoChange,
        }
    }

    /// Toggles the flag under the cursor, or on its neighbour in `direction` without wrapping.
    pub fn flag_toward(&mut self, direction: Option<Direction>) -> MarkOutcome {
        let target = match direction {
            None => Some(self.cursor),
            Some(direction) => direction.step(self.cursor, self.size()),
        };
        match target {
            Some(coords) => self.toggle_flag(coords),
            None => MarkOutcome::NoChange,
        }
    }

    pub fn chord_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(Visibility::Revealed(Cell::Numbered(count))) = self.visibility(coords) else {
            return RevealOutcome::NoChange;
        };
        if count != self.count_flagged_neighbors(coords) {
            return RevealOutcome::NoChange;
        }

        self.minefield
            .neighbors(coords, Adjacency::Eight)
            .map(|pos| self.reveal(pos))
            .fold(RevealOutcome::NoChange, BitOr::bitor)
    }

    /// Hidden neighbours a chord on `coords` would reveal right now.
    pub fn chord_targets(&self, coords: Coord2) -> Vec<Coord2> {
        match self.visibility(coords) {
            Some(Visibility::Revealed(Cell::Numbered(count)))
                if self.state.is_playing() && count == self.count_flagged_neighbors(coords) =>
            {
                self.minefield
                    .neighbors(coords, Adjacency::Eight)
                    .filter(|&pos| self.cell_at(pos).is_hidden())
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Once as many flags as bombs are down, reveals everything still hidden.
    ///
    /// Flag positions are not checked: a misplaced flag leaves a bomb hidden, and revealing it loses the game.
    pub fn check_win(&mut self) -> RevealOutcome {
        if !self.state.is_playing() || self.flag_count != self.bomb_count() {
            return RevealOutcome::NoChange;
        }

        let hidden: Vec<Coord2> = iter_coords(self.size())
            .filter(|&coords| self.cell_at(coords).is_hidden())
            .collect();
        let outcome = hidden
            .into_iter()
            .map(|coords| self.reveal(coords))
            .fold(RevealOutcome::NoChange, BitOr::bitor);

        if self.state.is_playing() {
            log::info!("Board cleared with {} flags", self.flag_count);
            self.state = GameState::Won;
            self.events.push(GameEvent::GameWon);
            RevealOutcome::Won
        } else {
            outcome
        }
    }

    /// Reveals the outer ring, which never holds a bomb, letting cascades pull in connected empty cells.
    pub fn reveal_border(&mut self) {
        for coords in iter_border(self.size()) {
            self.reveal(coords);
        }
    }

    /// Moves the cursor one cell, wrapping at the edges.
    pub fn move_cursor(&mut self, direction: Direction) -> MoveOutcome {
        if !self.state.is_playing() {
            return MoveOutcome::Blocked;
        }

        let next = direction.step_wrapping(self.cursor, self.size());
        match self.mode {
            Mode::Standard => {
                self.cursor = next;
                MoveOutcome::Moved(RevealOutcome::NoChange)
            }
            Mode::Soldier if self.cell_at(next).is_flagged() => MoveOutcome::Blocked,
            Mode::Soldier => {
                self.cursor = next;
                MoveOutcome::Moved(self.reveal(next))
            }
        }
    }

    /// Puts the cursor at `coords`, clamped to the board. Never reveals.
    pub fn place_cursor(&mut self, (x, y): Coord2) {
        let (size_x, size_y) = self.size();
        self.cursor = (x.min(size_x - 1), y.min(size_y - 1));
    }

    /// Ends the game on the player's request.
    pub fn end(&mut self) {
        self.state = GameState::Ended;
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        // at most 8 neighbours
        self.minefield
            .neighbors(coords, Adjacency::Eight)
            .filter(|&pos| self.cell_at(pos).is_flagged())
            .count() as u8
    }
}
