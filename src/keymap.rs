//! Key dispatch for the terminal front end.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Label;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Something the user asked the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Answer with this label directly.
    Answer(Label),
    /// Move the highlighted option.
    Move(Direction),
    /// Submit the highlighted option, close a popup or continue.
    Confirm,
    /// Close a popup, or quit when none is open.
    Back,
    NextQuestion,
    Quit,
}

/// Lookup table from keys to actions.
///
/// Every answer key carries its label from the moment the table is built.
pub struct KeyMap {
    bindings: HashMap<KeyCode, Action>,
}

impl KeyMap {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        for label in Label::ALL {
            let key = label.as_char();
            bindings.insert(KeyCode::Char(key), Action::Answer(label));
            bindings.insert(KeyCode::Char(key.to_ascii_lowercase()), Action::Answer(label));
        }

        let moves = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('k'), Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('j'), Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('h'), Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('l'), Direction::Right),
        ];
        for (key, direction) in moves {
            bindings.insert(key, Action::Move(direction));
        }

        bindings.insert(KeyCode::Enter, Action::Confirm);
        bindings.insert(KeyCode::Char(' '), Action::Confirm);
        bindings.insert(KeyCode::Esc, Action::Back);
        bindings.insert(KeyCode::Char('n'), Action::NextQuestion);
        bindings.insert(KeyCode::Char('N'), Action::NextQuestion);
        bindings.insert(KeyCode::Char('q'), Action::Quit);
        bindings.insert(KeyCode::Char('Q'), Action::Quit);

        Self { bindings }
    }

    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'C') => Some(Action::Quit),
                _ => None,
            };
        }
        self.bindings.get(&key.code).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
