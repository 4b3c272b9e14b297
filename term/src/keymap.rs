use checkers_core::{Command, Direction};

const ESC: char = '\x1b';
const CTRL_C: char = '\x03';

/// A key press recovered from cooked terminal input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    CtrlC,
    Other,
}

impl Key {
    pub fn command(self) -> Option<Command> {
        use Key::*;

        Some(match self {
            Char('h') | Left => Command::MoveCursor(Direction::Left),
            Char('j') | Down => Command::MoveCursor(Direction::Down),
            Char('k') | Up => Command::MoveCursor(Direction::Up),
            Char('l') | Right => Command::MoveCursor(Direction::Right),
            Space => Command::Confirm,
            Char('q') | CtrlC => Command::Quit,
            _ => return None,
        })
    }
}

/// Splits raw input into keys, recognising ANSI arrow sequences (`ESC [ A..D`).
pub fn decode(input: &str) -> Vec<Key> {
    let mut keys = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        let key = match ch {
            ESC => {
                if chars.next_if_eq(&'[').is_none() {
                    keys.push(Key::Other);
                    continue;
                }
                match chars.next() {
                    Some('A') => Key::Up,
                    Some('B') => Key::Down,
                    Some('C') => Key::Right,
                    Some('D') => Key::Left,
                    _ => Key::Other,
                }
            }
            CTRL_C => Key::CtrlC,
            ' ' => Key::Space,
            '\n' | '\r' => Key::Enter,
            ch if ch.is_control() => Key::Other,
            ch => Key::Char(ch),
        };
        keys.push(key);
    }

    keys
}
