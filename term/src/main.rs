use std::fs::OpenOptions;
use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, Clear, ClearType};
use grimsweep_core::{GameEvent, GameState, Intent, Session};

use crate::cli::Cli;
use crate::flavour::StatusLine;
use crate::input::Action;
use crate::render::{Frame, Renderer};
use crate::screen::Screen;

mod cli;
mod flavour;
mod input;
mod palette;
mod render;
mod screen;

const FPS: u64 = 60;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let terminal_size = terminal::size().context("Could not read the terminal size")?;
    let config = cli.game_config(terminal_size)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!(
        "Starting {} game on {:?} with {} bombs, seed {}",
        config.mode,
        config.size(),
        config.bomb_count(),
        seed
    );
    let session = Session::new(config, seed).context("Could not lay the minefield")?;

    let mut screen = Screen::enter(io::stdout()).context("Could not take over the terminal")?;
    let result = run(screen.out(), session, Renderer::new(cli.colour), seed);
    // restore the terminal before any error gets printed
    drop(screen);
    result
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("Could not open log file {}", cli.log_file.display()))?;
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run<W: Write>(
    out: &mut W,
    mut session: Session,
    mut renderer: Renderer,
    seed: u64,
) -> anyhow::Result<()> {
    let frame_time = Duration::from_micros(1_000_000 / FPS);
    let mut status = StatusLine::new(seed);
    let mut highlight = false;
    out.execute(Clear(ClearType::All))?;

    while session.state() != GameState::Ended {
        let engine = session.engine();
        let frame = Frame {
            snapshot: session.snapshot(),
            highlight: if highlight {
                engine.chord_targets(engine.cursor())
            } else {
                Vec::new()
            },
            status: status.render(engine.flags_left()),
        };
        renderer.draw(out, frame)?;

        if !event::poll(frame_time)? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(..) => {
                out.execute(Clear(ClearType::All))?;
                renderer.invalidate();
                continue;
            }
            _ => continue,
        };

        match input::action(key) {
            Some(Action::Play(intent)) => {
                let was_playing = session.state().is_playing();
                let events = session.apply(intent)?;
                if intent == Intent::Restart && session.state() == GameState::Playing {
                    status.reset();
                    out.execute(Clear(ClearType::All))?;
                    renderer.invalidate();
                } else if was_playing {
                    status.tick();
                }
                for event in events {
                    feedback(event, &mut status);
                }
            }
            Some(Action::ToggleHighlight) => highlight = !highlight,
            None => {}
        }
    }

    log::info!("Quit");
    Ok(())
}

/// Reacts to what the last intent did. Sounds are logged instead of played.
fn feedback(event: GameEvent, status: &mut StatusLine) {
    match event {
        GameEvent::CellRevealedEmpty => log::debug!("Sound: open ground"),
        GameEvent::CellRevealedNumber(n) => log::debug!("Sound: {} beeps", n),
        GameEvent::BombDetonated => {
            log::info!("KABOOM");
            status.died();
        }
        GameEvent::GameWon => {
            log::info!("Field cleared");
            status.won();
        }
    }
}
