use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use grimsweep_core::{Direction, Intent};

/// What a key press asks of the front-end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Play(Intent),
    /// Show or hide the cells a chord would reveal.
    ToggleHighlight,
}

pub fn action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    action_for_code(key.code)
}

pub fn action_for_code(code: KeyCode) -> Option<Action> {
    use Direction::*;
    use Intent::*;

    let intent = match code {
        KeyCode::Char('w') | KeyCode::Up => Move(Up),
        KeyCode::Char('s') | KeyCode::Down => Move(Down),
        KeyCode::Char('a') | KeyCode::Left => Move(Left),
        KeyCode::Char('d') | KeyCode::Right => Move(Right),
        KeyCode::Char('f') => Flag(None),
        // numpad layout, with a home-row fallback for keyboards without one
        KeyCode::Char('i' | '8') => Flag(Some(Up)),
        KeyCode::Char('k' | '2') => Flag(Some(Down)),
        KeyCode::Char('j' | '4') => Flag(Some(Left)),
        KeyCode::Char('l' | '6') => Flag(Some(Right)),
        KeyCode::Char('e' | '5') => Reveal,
        KeyCode::Enter => ChordReveal,
        KeyCode::Char(' ') => CheckWin,
        KeyCode::Char('r') => Restart,
        KeyCode::Esc | KeyCode::Char('q') => Quit,
        KeyCode::Char('h' | '0') => return Some(Action::ToggleHighlight),
        _ => return None,
    };
    Some(Action::Play(intent))
}
