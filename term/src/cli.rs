use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use grimsweep_core::{BombDensity, CellCount, Coord, Coord2, GameConfig, Mode};

use crate::palette::{Scheme, scheme_help};

/// Rows under the field: one blank, one status line.
pub const STATUS_ROWS: Coord = 2;

#[derive(Debug, Parser)]
#[command(
    name = "grimsweep",
    version,
    about = "Minesweeper: Grimdark Edition",
    after_help = scheme_help(),
)]
pub struct Cli {
    /// Game mode: `standard`, or `soldier` to reveal every cell you step on.
    #[arg(short, long, default_value = "standard")]
    pub mode: Mode,

    /// Field size, defaults to the whole terminal.
    #[arg(short, long, value_name = "WIDTHxHEIGHT", value_parser = parse_area)]
    pub area: Option<Coord2>,

    /// Exact number of bombs.
    #[arg(short, long, conflicts_with = "bomb_percent")]
    pub bombs: Option<CellCount>,

    /// Share of the inner cells holding a bomb, between 0 and 1.
    #[arg(short = 'B', long, value_name = "FRACTION")]
    pub bomb_percent: Option<f64>,

    /// Colour scheme for the numbers.
    #[arg(short, long, value_enum, default_value_t)]
    pub colour: Scheme,

    /// Seed for the first minefield; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "sweeper.log")]
    pub log_file: PathBuf,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Cli {
    /// Game settings for a terminal of `terminal` columns and rows.
    pub fn game_config(&self, terminal: Coord2) -> anyhow::Result<GameConfig> {
        let display = (terminal.0, terminal.1.saturating_sub(STATUS_ROWS));
        let size = self.area.unwrap_or(display);
        let density = BombDensity::from_options(self.bombs, self.bomb_percent)?;
        let config = GameConfig::new(size, density, self.mode)?.fit_display(display)?;
        Ok(config)
    }
}

fn parse_area(s: &str) -> Result<Coord2, String> {
    let Some((width, height)) = s.split_once(['x', 'X']) else {
        return Err(format!("expected WIDTHxHEIGHT, got `{}`", s));
    };
    let parse = |part: &str| {
        part.trim()
            .parse::<Coord>()
            .map_err(|e| format!("bad dimension `{}`: {}", part, e))
    };
    Ok((parse(width)?, parse(height)?))
}
