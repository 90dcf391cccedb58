use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

/// Owns the terminal while the game runs: raw mode, alternate screen, hidden cursor.
///
/// Everything is undone on drop, so early returns and panics leave the shell usable.
pub struct Screen<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> Screen<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::enter_with(out, true)
    }

    /// Takes over `out`; `raw_mode` says whether raw mode is ours to disable.
    fn enter_with(out: W, raw_mode: bool) -> io::Result<Self> {
        let mut screen = Self { out, raw_mode };
        execute!(screen.out, EnterAlternateScreen, Hide)?;
        Ok(screen)
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        // best effort, nothing left to report to
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;

    const ENTER_ALTERNATE: &str = "\x1b[?1049h";
    const LEAVE_ALTERNATE: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn drop_restores_screen() {
        let mut out = Vec::new();
        {
            let mut screen = Screen::enter_with(&mut out, false).unwrap();
            write!(screen.out(), "frame").unwrap();
        }

        let text = text(&out);
        let entered = text.find(ENTER_ALTERNATE).unwrap();
        let frame = text.find("frame").unwrap();
        let left = text.find(LEAVE_ALTERNATE).unwrap();
        assert!(entered < frame && frame < left);
        assert!(text.contains(SHOW_CURSOR));
    }

    #[test]
    fn panic_still_restores_screen() {
        let mut out = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _screen = Screen::enter_with(&mut out, false).unwrap();
            panic!("game loop blew up");
        }));

        assert!(result.is_err());
        assert!(text(&out).ends_with(LEAVE_ALTERNATE));
    }
}
