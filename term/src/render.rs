use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use grimsweep_core::{Cell, Coord2, Snapshot, Visibility, iter_coords};

use crate::flavour;
use crate::palette::{self, Scheme};

/// One terminal cell: a glyph with its colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
}

impl Glyph {
    const fn new(symbol: char, fg: Color, bg: Color) -> Self {
        Self { symbol, fg, bg }
    }
}

/// Everything drawn in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub snapshot: Snapshot,
    /// Hidden cells a chord at the cursor would reveal.
    pub highlight: Vec<Coord2>,
    pub status: String,
}

impl Frame {
    pub fn glyph(&self, scheme: Scheme, coords: Coord2) -> Glyph {
        if self.highlight.contains(&coords) {
            return Glyph::new('█', palette::HIGHLIGHT, Color::Reset);
        }

        let visibility = self.snapshot.cell_at(coords);
        if coords == self.snapshot.cursor {
            return cursor_glyph(scheme, visibility);
        }

        match visibility {
            Visibility::Hidden => Glyph::new('█', palette::FIELD, Color::Reset),
            Visibility::Flagged => Glyph::new('F', palette::FLAG, palette::FIELD),
            Visibility::Revealed(Cell::Bomb) => Glyph::new('*', palette::BOMB, Color::Reset),
            Visibility::Revealed(Cell::Numbered(n)) => {
                Glyph::new(digit(n), scheme.number(n), Color::Reset)
            }
            Visibility::Revealed(Cell::Empty) => Glyph::new(' ', Color::Reset, Color::Reset),
        }
    }

    /// Status row: flags left, then the flavour text.
    pub fn status_text(&self) -> String {
        format!(
            "Flags: {:>4} | {:<width$}",
            self.snapshot.flags_left(),
            self.status,
            width = flavour::max_width(),
        )
    }
}

fn cursor_glyph(scheme: Scheme, visibility: Visibility) -> Glyph {
    match visibility {
        Visibility::Hidden => Glyph::new(' ', Color::Reset, palette::PLAYER_FIELD),
        Visibility::Flagged => Glyph::new('F', palette::FLAG, palette::PLAYER_FIELD),
        Visibility::Revealed(Cell::Numbered(n)) => {
            Glyph::new(digit(n), scheme.number(n), palette::PLAYER)
        }
        Visibility::Revealed(Cell::Bomb) => Glyph::new('*', palette::BOMB, palette::PLAYER),
        Visibility::Revealed(Cell::Empty) => Glyph::new(' ', Color::Reset, palette::PLAYER),
    }
}

fn digit(n: u8) -> char {
    char::from_digit(u32::from(n), 10).unwrap_or('?')
}

/// Draws frames, skipping any identical to the last one drawn.
#[derive(Debug, Default)]
pub struct Renderer {
    scheme: Scheme,
    last: Option<Frame>,
}

impl Renderer {
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme, last: None }
    }

    /// Forces the next frame out, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, out: &mut impl Write, frame: Frame) -> io::Result<()> {
        if self.last.as_ref() == Some(&frame) {
            return Ok(());
        }

        let (_, height) = frame.snapshot.size;
        let mut row = None;
        for (x, y) in iter_rows(frame.snapshot.size) {
            if row != Some(y) {
                queue!(out, MoveTo(x, y))?;
                row = Some(y);
            }
            let glyph = frame.glyph(self.scheme, (x, y));
            queue!(
                out,
                SetForegroundColor(glyph.fg),
                SetBackgroundColor(glyph.bg),
                Print(glyph.symbol)
            )?;
        }

        queue!(
            out,
            ResetColor,
            MoveTo(0, height + 1),
            Clear(ClearType::CurrentLine),
            Print(frame.status_text())
        )?;
        out.flush()?;

        self.last = Some(frame);
        Ok(())
    }
}

/// Row-major order, the way a terminal is written.
fn iter_rows((width, height): Coord2) -> impl Iterator<Item = Coord2> {
    iter_coords((height, width)).map(|(y, x)| (x, y))
}

#[cfg(test)]
mod tests {
    use grimsweep_core::{Minefield, Mode, PlayEngine};

    use super::*;

    fn frame() -> Frame {
        let field = Minefield::from_bomb_coords((5, 5), &[(2, 2)]).unwrap();
        let mut engine = PlayEngine::new(field, Mode::Standard);
        engine.toggle_flag((2, 2));
        engine.place_cursor((1, 1));
        Frame {
            snapshot: Snapshot::from_engine(&engine),
            highlight: Vec::new(),
            status: String::from("..."),
        }
    }

    #[test]
    fn glyphs_follow_visibility() {
        let frame = frame();
        let scheme = Scheme::Viridis;

        assert_eq!(
            frame.glyph(scheme, (0, 0)),
            Glyph::new(' ', Color::Reset, Color::Reset)
        );
        assert_eq!(
            frame.glyph(scheme, (2, 2)),
            Glyph::new('F', palette::FLAG, palette::FIELD)
        );
        assert_eq!(
            frame.glyph(scheme, (1, 1)),
            Glyph::new('1', scheme.number(1), palette::PLAYER)
        );
    }

    #[test]
    fn highlight_wins_over_cursor() {
        let mut frame = frame();
        frame.highlight.push((1, 1));
        assert_eq!(
            frame.glyph(Scheme::Viridis, (1, 1)),
            Glyph::new('█', palette::HIGHLIGHT, Color::Reset)
        );
    }

    #[test]
    fn status_pads_to_widest_line() {
        let text = frame().status_text();
        assert!(text.starts_with("Flags:    0 | ..."));
        assert_eq!(text.len(), "Flags:    0 | ".len() + flavour::max_width());
    }

    #[test]
    fn rows_come_out_in_reading_order() {
        let coords: Vec<_> = iter_rows((3, 2)).collect();
        assert_eq!(coords, [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn identical_frames_are_skipped() {
        let mut renderer = Renderer::new(Scheme::default());
        let mut out = Vec::new();
        renderer.draw(&mut out, frame()).unwrap();
        let written = out.len();
        assert!(written > 0);

        renderer.draw(&mut out, frame()).unwrap();
        assert_eq!(out.len(), written);

        renderer.invalidate();
        renderer.draw(&mut out, frame()).unwrap();
        assert!(out.len() > written);
    }
}
