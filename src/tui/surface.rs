//! # Terminal Surface
//!
//! Everything the menu engine needs from a character terminal, and nothing
//! more: absolute cursor moves, a 16-color palette, printing, and blocking
//! single-key reads.
//!
//! ```text
//!            Surface (trait)
//!           ┌──────┴───────┐
//!  CrosstermSurface    BufferSurface
//!   (real tty)         (ratatui Buffer + scripted keys)
//! ```
//!
//! ## Cursor tracking
//!
//! Implementations track the cursor themselves instead of querying the
//! terminal: `print` advances it by the display width of the text, `\t` moves
//! to the next multiple of [`TAB_WIDTH`], `\n` behaves like [`Surface::newline`].

use serde::{Deserialize, Serialize};
use std::io;

use crate::core::key::Key;

pub const TAB_WIDTH: u16 = 8;

/// Classic 16-entry console palette, in attribute order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Aqua = 3,
    Red = 4,
    Purple = 5,
    Yellow = 6,
    White = 7,
    Gray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightAqua = 11,
    LightRed = 12,
    LightPurple = 13,
    LightYellow = 14,
    BrightWhite = 15,
}

impl Color {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Combined attribute byte: `fg + bg * 16`.
    pub fn attribute(fg: Color, bg: Color) -> u8 {
        fg.index() + bg.index() * 16
    }
}

pub trait Surface {
    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()>;

    fn cursor(&self) -> (u16, u16);

    /// Move to column `x` on the current row.
    fn set_x(&mut self, x: u16) -> io::Result<()> {
        let (_, y) = self.cursor();
        self.set_cursor(x, y)
    }

    fn set_color(&mut self, fg: Color, bg: Color) -> io::Result<()>;

    fn set_foreground(&mut self, fg: Color) -> io::Result<()> {
        self.set_color(fg, Color::Black)
    }

    fn reset_color(&mut self) -> io::Result<()>;

    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Move to column 0 of the next row.
    fn newline(&mut self) -> io::Result<()>;

    fn show_cursor(&mut self, visible: bool) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;

    /// Block until one key is pressed.
    fn read_key(&mut self) -> io::Result<Key>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Column reached by a tab at column `x`, pinned at `u16::MAX`.
pub(crate) fn next_tab_stop(x: u16) -> u16 {
    (x / TAB_WIDTH + 1).saturating_mul(TAB_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_combines_fg_and_bg() {
        assert_eq!(Color::attribute(Color::Black, Color::White), 112);
        assert_eq!(Color::attribute(Color::BrightWhite, Color::Black), 15);
        assert_eq!(Color::attribute(Color::Red, Color::Blue), 20);
    }

    #[test]
    fn test_next_tab_stop() {
        assert_eq!(next_tab_stop(0), 8);
        assert_eq!(next_tab_stop(7), 8);
        assert_eq!(next_tab_stop(8), 16);
    }

    #[test]
    fn test_next_tab_stop_saturates_at_right_edge() {
        assert_eq!(next_tab_stop(u16::MAX - 3), u16::MAX);
        assert_eq!(next_tab_stop(u16::MAX), u16::MAX);
    }
}
