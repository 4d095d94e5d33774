use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::Serialize;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns true when turning from `current` to `requested` would fold the
/// head back onto the neck. A one-cell snake has no neck and may reverse.
#[must_use]
pub fn is_illegal_reversal(current: Direction, requested: Direction, snake_len: usize) -> bool {
    snake_len > 1 && requested == current.opposite()
}

/// Single-slot mailbox holding the direction requested since the last tick.
///
/// Writes overwrite each other; the slot is drained once per tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct DirectionBuffer {
    pending: Option<Direction>,
}

impl DirectionBuffer {
    /// Stores `requested` unless it reverses `current` on a multi-cell snake.
    ///
    /// Returns whether the request was kept.
    pub fn request(&mut self, requested: Direction, current: Direction, snake_len: usize) -> bool {
        if is_illegal_reversal(current, requested, snake_len) {
            return false;
        }

        self.pending = Some(requested);
        true
    }

    /// Drains the slot.
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    #[must_use]
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }
}

/// High-level input events produced by the terminal host.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Restart,
    Quit,
}

impl GameInput {
    /// Maps a key press to a game input. Releases and repeats are ignored.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let input = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Self::Direction(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Self::Direction(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Self::Direction(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => Self::Direction(Direction::Right),
            KeyCode::Char(' ' | 'p' | 'P') => Self::Pause,
            KeyCode::Esc | KeyCode::Char('r' | 'R') => Self::Restart,
            KeyCode::Char('q' | 'Q') => Self::Quit,
            _ => return None,
        };

        Some(input)
    }
}

/// Waits up to `timeout` for one key press and maps it to a game input.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(GameInput::from_key_event(key)),
        _ => Ok(None),
    }
}
