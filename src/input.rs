#![warn(clippy::all, clippy::pedantic)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A gameplay command forwarded from the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Left,
    Right,
    Rotate,
    Down,
    HardDrop,
}

/// Shell-level commands that are not piece movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Game(Input),
    StartStop,
    Theme(usize),
    Quit,
}

/// Maps a key press to a command.
///
/// Arrow keys always map to game input, whatever else the terminal or the
/// surrounding UI would like to do with them.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let command = match key.code {
        KeyCode::Left => Command::Game(Input::Left),
        KeyCode::Right => Command::Game(Input::Right),
        KeyCode::Up => Command::Game(Input::Rotate),
        KeyCode::Down => Command::Game(Input::Down),
        KeyCode::Char(' ') => Command::Game(Input::HardDrop),
        KeyCode::Enter | KeyCode::Char('s') => Command::StartStop,
        KeyCode::Char('1') => Command::Theme(0),
        KeyCode::Char('2') => Command::Theme(1),
        KeyCode::Char('3') => Command::Theme(2),
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}
