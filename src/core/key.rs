//! # Key Codes
//!
//! Keys are integer codes in the classic console scheme: arrow keys arrive as
//! an extended-prefix byte followed by a scan code (72 up, 80 down, 75 left,
//! 77 right), everything else is the character code itself (13 for Enter).
//!
//! The extended flag is carried alongside the code so `Key::UP` (extended 72)
//! and a typed `'H'` (plain 72) stay distinct.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    code: u32,
    extended: bool,
}

impl Key {
    pub const UP: Key = Key::extended(72);
    pub const DOWN: Key = Key::extended(80);
    pub const LEFT: Key = Key::extended(75);
    pub const RIGHT: Key = Key::extended(77);
    pub const ENTER: Key = Key::plain(13);
    pub const ESCAPE: Key = Key::plain(27);
    pub const BACKSPACE: Key = Key::plain(8);
    pub const TAB: Key = Key::plain(9);

    pub const fn plain(code: u32) -> Self {
        Self {
            code,
            extended: false,
        }
    }

    pub const fn extended(code: u32) -> Self {
        Self {
            code,
            extended: true,
        }
    }

    pub const fn from_char(c: char) -> Self {
        Self::plain(c as u32)
    }

    pub fn code(self) -> u32 {
        self.code
    }

    pub fn is_extended(self) -> bool {
        self.extended
    }

    pub fn as_char(self) -> Option<char> {
        if self.extended {
            return None;
        }
        char::from_u32(self.code)
    }

    /// Zero-based entry index for the numeric shortcuts `'1'..='9'`.
    pub fn shortcut_index(self) -> Option<usize> {
        match self.as_char()? {
            c @ '1'..='9' => Some(c as usize - '1' as usize),
            _ => None,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::from_char(c)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Key::UP => f.write_str("Up"),
            Key::DOWN => f.write_str("Down"),
            Key::LEFT => f.write_str("Left"),
            Key::RIGHT => f.write_str("Right"),
            Key::ENTER => f.write_str("Enter"),
            Key::ESCAPE => f.write_str("Esc"),
            Key::BACKSPACE => f.write_str("Backspace"),
            Key::TAB => f.write_str("Tab"),
            key => match key.as_char() {
                Some(c) if !c.is_control() => write!(f, "'{c}'"),
                _ if key.extended => write!(f, "ext:{}", key.code),
                _ => write!(f, "#{}", key.code),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_codes_match_console_scheme() {
        assert_eq!(Key::UP.code(), 72);
        assert_eq!(Key::DOWN.code(), 80);
        assert_eq!(Key::LEFT.code(), 75);
        assert_eq!(Key::RIGHT.code(), 77);
        assert_eq!(Key::ENTER.code(), 13);
    }

    #[test]
    fn test_arrow_does_not_collide_with_letter() {
        assert_eq!(Key::from('H').code(), Key::UP.code());
        assert_ne!(Key::from('H'), Key::UP);
        assert_ne!(Key::from('P'), Key::DOWN);
    }

    #[test]
    fn test_shortcut_index() {
        assert_eq!(Key::from('1').shortcut_index(), Some(0));
        assert_eq!(Key::from('9').shortcut_index(), Some(8));
        assert_eq!(Key::from('0').shortcut_index(), None);
        assert_eq!(Key::from('q').shortcut_index(), None);
        // Extended 49 is not the digit '1'
        assert_eq!(Key::extended(49).shortcut_index(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::UP.to_string(), "Up");
        assert_eq!(Key::from('q').to_string(), "'q'");
        assert_eq!(Key::plain(1).to_string(), "#1");
        assert_eq!(Key::extended(59).to_string(), "ext:59");
    }
}
