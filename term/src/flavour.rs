use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const MELANCHOLY: &[&str] = &[
    "You step over a body.",
    "Crows circle overhead, watching you with morbid curiosity.",
    "You think about your loved ones.",
    "The incessant beeping of the metal detector makes your ears ring.",
    "A crater marks the location of a mine you won't have to dig up.",
    "You wonder what was so important about this piece of land.",
    "You try to remember what this conflict is even about.",
    "You think back to the last time the idea of death bothered you.",
    "You don't want to be here. Then again, neither did most of the corpses.",
    "You squint in the glare of the sun.",
    "The crows settle in a tree, as if awaiting a show.",
    "It gets harder to reason about mine placements over time.",
    "How many mines are left? {mines}? {mines} too many.",
    "You wonder if the general of this theatre has ever had to do this.",
    "You hear a distant explosion, and pray that it wasn't the poor guy a field over.",
    "Are you sure these are all in the right place?",
    "You step over what you're pretty sure was a body.",
    "It's incredibly difficult to keep your concentration.",
    "You have to be right {mines} more times. You only have to be wrong once.",
    "The ground is soft and pliant under your boots.",
    "You stop to take a drink of water, and continue on.",
    "You freeze. Was that a click? ...No. You're still alive.",
    "You consider the kind of person who mines a field with no intention of cleaning them up.",
    "You decide you don't like that kind of person.",
    "...",
];

const YOU_DIED: &[&str] = &[
    "At least you didn't suffer.",
    "",
    "...",
    "Click.",
    "Better luck in your next life.",
    "Your widow receives a $70,000 cheque.",
    "You don't feel a thing.",
    "You notice your mistake just as you're making it.",
    "Oops.",
    "On the plus side, this'll be the worst thing that'll happen to you today.",
    "The next one steps over your body as they search for the remaining {mines} mines.",
    "You never did find out what was so important about this place.",
];

const YOU_WIN: &[&str] = &["You survive to minesweep another day."];

/// Intents between two melancholy lines.
pub const INTERVAL: RangeInclusive<u32> = 70..=120;

/// Widest line, so a shorter one fully overwrites the last.
pub fn max_width() -> usize {
    MELANCHOLY
        .iter()
        .chain(YOU_DIED)
        .chain(YOU_WIN)
        .map(|line| line.len())
        .max()
        .unwrap_or(0)
}

/// The text shown after the flag counter.
///
/// Melancholy lines come in a fixed order and run out for good; they are not refilled on restart.
#[derive(Clone, Debug)]
pub struct StatusLine {
    rng: SmallRng,
    countdown: u32,
    melancholy: VecDeque<&'static str>,
    current: &'static str,
}

impl StatusLine {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let countdown = rng.random_range(INTERVAL);
        Self {
            rng,
            countdown,
            melancholy: MELANCHOLY.iter().copied().collect(),
            current: "",
        }
    }

    /// Counts one intent dispatched while playing.
    pub fn tick(&mut self) {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return;
        }
        if let Some(line) = self.melancholy.pop_front() {
            log::trace!("Melancholy: {}", line);
            self.current = line;
        }
        self.countdown = self.rng.random_range(INTERVAL);
    }

    pub fn died(&mut self) {
        self.current = self.pick(YOU_DIED);
    }

    pub fn won(&mut self) {
        self.current = self.pick(YOU_WIN);
    }

    /// Clears the line for a new game, keeping the melancholy progress.
    pub fn reset(&mut self) {
        self.current = "";
        self.countdown = self.rng.random_range(INTERVAL);
    }

    pub fn render(&self, mines: i64) -> String {
        self.current.replace("{mines}", &mines.to_string())
    }

    fn pick(&mut self, lines: &[&'static str]) -> &'static str {
        lines[self.rng.random_range(0..lines.len())]
    }
}
