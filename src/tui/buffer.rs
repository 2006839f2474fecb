//! Headless surface backed by a ratatui [`Buffer`].
//!
//! Draws into an in-memory cell grid and reads keys from a scripted queue.
//! Used for `--preview` output and throughout the tests, where cell contents
//! and styles can be inspected directly.

use std::collections::VecDeque;
use std::io;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color as CellColor, Style};
use unicode_width::UnicodeWidthStr;

use crate::core::key::Key;
use crate::tui::surface::{Color, Surface, next_tab_stop};

pub struct BufferSurface {
    buffer: Buffer,
    cursor: (u16, u16),
    style: Style,
    cursor_visible: bool,
    keys: VecDeque<Key>,
}

impl BufferSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
            cursor: (0, 0),
            style: Style::default(),
            cursor_visible: true,
            keys: VecDeque::new(),
        }
    }

    /// Queue keys for subsequent `read_key` calls.
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Row `y` as text, trailing blanks trimmed.
    pub fn line(&self, y: u16) -> String {
        let area = self.buffer.area;
        let mut out = String::new();
        if y >= area.height {
            return out;
        }
        for x in 0..area.width {
            if let Some(cell) = self.buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.trim_end().to_string()
    }

    /// All rows as text, trailing blank rows dropped.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = (0..self.buffer.area.height).map(|y| self.line(y)).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    /// Foreground and background of the cell at (x, y).
    pub fn colors_at(&self, x: u16, y: u16) -> Option<(CellColor, CellColor)> {
        self.buffer.cell((x, y)).map(|cell| (cell.fg, cell.bg))
    }

    fn write_segment(&mut self, text: &str) {
        let area = self.buffer.area;
        let (x, y) = self.cursor;
        if y < area.height && x < area.width {
            let max_width = usize::from(area.width - x);
            self.buffer.set_stringn(x, y, text, max_width, self.style);
        }
        let advance = u16::try_from(text.width()).unwrap_or(u16::MAX);
        self.cursor.0 = x.saturating_add(advance);
    }
}

impl Surface for BufferSurface {
    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    fn set_color(&mut self, fg: Color, bg: Color) -> io::Result<()> {
        self.style = Style::default().fg(cell_color(fg)).bg(cell_color(bg));
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.style = Style::default();
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut rest = text;
        while let Some(pos) = rest.find(['\t', '\n']) {
            self.write_segment(&rest[..pos]);
            if rest.as_bytes()[pos] == b'\t' {
                let stop = next_tab_stop(self.cursor.0);
                let pad = " ".repeat(usize::from(stop - self.cursor.0));
                self.write_segment(&pad);
            } else {
                self.newline()?;
            }
            rest = &rest[pos + 1..];
        }
        self.write_segment(rest);
        Ok(())
    }

    fn newline(&mut self) -> io::Result<()> {
        self.cursor = (0, self.cursor.1.saturating_add(1));
        Ok(())
    }

    fn show_cursor(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.buffer.reset();
        self.cursor = (0, 0);
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted keys left"))
    }
}

/// Console palette → ANSI cell colors (attribute order differs from ANSI order).
pub(crate) fn cell_color(color: Color) -> CellColor {
    match color {
        Color::Black => CellColor::Black,
        Color::Blue => CellColor::Blue,
        Color::Green => CellColor::Green,
        Color::Aqua => CellColor::Cyan,
        Color::Red => CellColor::Red,
        Color::Purple => CellColor::Magenta,
        Color::Yellow => CellColor::Yellow,
        Color::White => CellColor::Gray,
        Color::Gray => CellColor::DarkGray,
        Color::LightBlue => CellColor::LightBlue,
        Color::LightGreen => CellColor::LightGreen,
        Color::LightAqua => CellColor::LightCyan,
        Color::LightRed => CellColor::LightRed,
        Color::LightPurple => CellColor::LightMagenta,
        Color::LightYellow => CellColor::LightYellow,
        Color::BrightWhite => CellColor::White,
    }
}
