//! Key Module
//!
//! Platform-independent key codes for the edit modes, decoded either from
//! crossterm key events or from raw control bytes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single keystroke as the edit modes see it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control chord with a letter, always lowercase (`Ctrl('a')`)
    Ctrl(char),

    Home,
    ShiftHome,
    End,
    ShiftEnd,
    Left,
    ShiftLeft,
    CtrlLeft,
    CtrlShiftLeft,
    Right,
    ShiftRight,
    CtrlRight,
    CtrlShiftRight,
    Up,
    Down,

    Delete,
    Backspace,
    Tab,
    BackTab,
    Enter,
    Escape,
    F1,

    /// Anything the modes have no binding for
    Other,
}

impl Key {
    /// Decode a raw byte as a terminal in raw mode delivers it
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x08 | 0x7F => Key::Backspace,
            0x09 => Key::Tab,
            0x0A | 0x0D => Key::Enter,
            0x1B => Key::Escape,
            0x01..=0x1A => Key::Ctrl((b'a' + byte - 1) as char),
            0x20..=0x7E => Key::Char(byte as char),
            _ => Key::Other,
        }
    }

    /// Decode a crossterm key event
    pub fn from_event(event: KeyEvent) -> Self {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let shift = event.modifiers.contains(KeyModifiers::SHIFT);

        match event.code {
            KeyCode::Char(c) if ctrl => {
                let c = c.to_ascii_lowercase();
                if c.is_ascii_lowercase() {
                    Key::Ctrl(c)
                } else {
                    Key::Other
                }
            }
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Home if shift => Key::ShiftHome,
            KeyCode::Home => Key::Home,
            KeyCode::End if shift => Key::ShiftEnd,
            KeyCode::End => Key::End,
            KeyCode::Left => match (ctrl, shift) {
                (true, true) => Key::CtrlShiftLeft,
                (true, false) => Key::CtrlLeft,
                (false, true) => Key::ShiftLeft,
                (false, false) => Key::Left,
            },
            KeyCode::Right => match (ctrl, shift) {
                (true, true) => Key::CtrlShiftRight,
                (true, false) => Key::CtrlRight,
                (false, true) => Key::ShiftRight,
                (false, false) => Key::Right,
            },
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Delete => Key::Delete,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab if shift => Key::BackTab,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::F(1) => Key::F1,
            _ => Key::Other,
        }
    }

    /// The character to insert, if this key types one in the printable
    /// ASCII range
    pub fn printable(self) -> Option<char> {
        match self {
            Key::Char(c) if (' '..='~').contains(&c) => Some(c),
            _ => None,
        }
    }
}

/// Decode a string of raw bytes into keys, one per byte
pub fn keys_from_bytes(bytes: &[u8]) -> Vec<Key> {
    bytes.iter().copied().map(Key::from_byte).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn test_from_byte() {
        assert_eq!(Key::from_byte(0x01), Key::Ctrl('a'));
        assert_eq!(Key::from_byte(0x03), Key::Ctrl('c'));
        assert_eq!(Key::from_byte(0x16), Key::Ctrl('v'));
        assert_eq!(Key::from_byte(0x7F), Key::Backspace);
        assert_eq!(Key::from_byte(b'\r'), Key::Enter);
        assert_eq!(Key::from_byte(b'\t'), Key::Tab);
        assert_eq!(Key::from_byte(b'Z'), Key::Char('Z'));
        assert_eq!(Key::from_byte(0x1B), Key::Escape);
        assert_eq!(Key::from_byte(0x1C), Key::Other);
    }

    #[test]
    fn test_from_event_modifiers() {
        assert_eq!(
            Key::from_event(event(KeyCode::Left, KeyModifiers::CONTROL | KeyModifiers::SHIFT)),
            Key::CtrlShiftLeft
        );
        assert_eq!(Key::from_event(event(KeyCode::Right, KeyModifiers::SHIFT)), Key::ShiftRight);
        assert_eq!(Key::from_event(event(KeyCode::Home, KeyModifiers::SHIFT)), Key::ShiftHome);
        assert_eq!(Key::from_event(event(KeyCode::Char('K'), KeyModifiers::CONTROL)), Key::Ctrl('k'));
        assert_eq!(Key::from_event(event(KeyCode::Tab, KeyModifiers::SHIFT)), Key::BackTab);
        assert_eq!(Key::from_event(event(KeyCode::F(1), KeyModifiers::NONE)), Key::F1);
        assert_eq!(Key::from_event(event(KeyCode::F(2), KeyModifiers::NONE)), Key::Other);
    }

    #[test]
    fn test_printable_range() {
        assert_eq!(Key::Char('a').printable(), Some('a'));
        assert_eq!(Key::Char('~').printable(), Some('~'));
        assert_eq!(Key::Char('é').printable(), None);
        assert_eq!(Key::Enter.printable(), None);
    }
}
