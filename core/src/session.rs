use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a player can ask of a running session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    /// Reveal the cell under the cursor.
    Reveal,
    /// Toggle a flag under the cursor, or next to it in the given direction.
    Flag(Option<Direction>),
    /// Chord on the cell under the cursor.
    ChordReveal,
    CheckWin,
    Restart,
    Quit,
}

/// A run of games sharing one configuration, driven one intent at a time.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    rng: SmallRng,
    game_seed: u64,
    engine: PlayEngine,
}

impl Session {
    /// Generates the first game. Every later game's seed is drawn from `seed` too.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let game_seed = rng.random();
        let engine = start_game(&config, game_seed)?;
        Ok(Self {
            config,
            rng,
            game_seed,
            engine,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn state(&self) -> GameState {
        self.engine.state()
    }

    /// Seed the current minefield was generated from.
    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(&self.engine)
    }

    /// Applies one intent and returns the feedback it produced.
    ///
    /// Once a game is won or lost only `Restart` and `Quit` do anything; once ended, nothing does.
    pub fn apply(&mut self, intent: Intent) -> Result<Vec<GameEvent>> {
        use Intent::*;

        let state = self.engine.state();
        log::debug!("{:?} while {:?}", intent, state);

        match intent {
            _ if state == GameState::Ended => {}
            Quit => self.engine.end(),
            Restart => self.restart()?,
            _ if state.is_decided() => {}
            Move(direction) => {
                self.engine.move_cursor(direction);
            }
            Reveal => {
                self.engine.reveal(self.engine.cursor());
            }
            Flag(direction) => {
                self.engine.flag_toward(direction);
            }
            ChordReveal => {
                self.engine.chord_reveal(self.engine.cursor());
            }
            CheckWin => {
                self.engine.check_win();
            }
        }

        Ok(self.engine.drain_events())
    }

    /// Throws the current game away and generates a fresh one.
    fn restart(&mut self) -> Result<()> {
        let game_seed = self.rng.random();
        self.engine = start_game(&self.config, game_seed)?;
        self.game_seed = game_seed;
        log::info!("Game restarted with seed {}", game_seed);
        Ok(())
    }
}

fn start_game(config: &GameConfig, game_seed: u64) -> Result<PlayEngine> {
    let minefield = RandomMinefieldGenerator::new(game_seed).generate(config)?;
    Ok(PlayEngine::new(minefield, config.mode))
}
