//! Real-terminal surface built on crossterm.
//!
//! Commands are queued and flushed before each blocking key read, so one
//! menu redraw reaches the terminal as a single write.

use std::io::{self, Stdout, Write, stdout};

use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use log::info;
use unicode_width::UnicodeWidthStr;

use crate::core::key::Key;
use crate::tui::event;
use crate::tui::surface::{Color, Surface, next_tab_stop};

pub struct CrosstermSurface<W: Write = Stdout> {
    out: W,
    cursor: (u16, u16),
}

impl CrosstermSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> CrosstermSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, cursor: (0, 0) }
    }

    fn print_segment(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))?;
        let advance = u16::try_from(text.width()).unwrap_or(u16::MAX);
        self.cursor.0 = self.cursor.0.saturating_add(advance);
        Ok(())
    }
}

impl<W: Write> Surface for CrosstermSurface<W> {
    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))?;
        self.cursor = (x, y);
        Ok(())
    }

    fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    fn set_color(&mut self, fg: Color, bg: Color) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(term_color(fg)),
            SetBackgroundColor(term_color(bg))
        )
    }

    fn reset_color(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut rest = text;
        while let Some(pos) = rest.find(['\t', '\n']) {
            self.print_segment(&rest[..pos])?;
            if rest.as_bytes()[pos] == b'\t' {
                let pad = " ".repeat(usize::from(next_tab_stop(self.cursor.0) - self.cursor.0));
                self.print_segment(&pad)?;
            } else {
                self.newline()?;
            }
            rest = &rest[pos + 1..];
        }
        self.print_segment(rest)
    }

    fn newline(&mut self) -> io::Result<()> {
        // Raw mode: a bare '\n' would not return the carriage
        queue!(self.out, MoveToNextLine(1))?;
        self.cursor = (0, self.cursor.1.saturating_add(1));
        Ok(())
    }

    fn show_cursor(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, Show)
        } else {
            queue!(self.out, Hide)
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.cursor = (0, 0);
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.out.flush()?;
        event::read_key()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Console palette → crossterm colors.
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::Blue => TermColor::DarkBlue,
        Color::Green => TermColor::DarkGreen,
        Color::Aqua => TermColor::DarkCyan,
        Color::Red => TermColor::DarkRed,
        Color::Purple => TermColor::DarkMagenta,
        Color::Yellow => TermColor::DarkYellow,
        Color::White => TermColor::Grey,
        Color::Gray => TermColor::DarkGrey,
        Color::LightBlue => TermColor::Blue,
        Color::LightGreen => TermColor::Green,
        Color::LightAqua => TermColor::Cyan,
        Color::LightRed => TermColor::Red,
        Color::LightPurple => TermColor::Magenta,
        Color::LightYellow => TermColor::Yellow,
        Color::BrightWhite => TermColor::White,
    }
}

/// Puts the terminal into full-screen raw mode with a hidden cursor, and
/// restores it on drop.
pub struct TerminalModeGuard;

impl TerminalModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        info!("Terminal modes enabled (raw, alternate screen, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
