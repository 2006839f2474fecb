//! # Menu Component
//!
//! A bordered, fixed-width list of labelled actions with one highlighted
//! entry, plus the [`ActionRegistry`] whose legend is drawn beneath it.
//!
//! ```text
//! ╔═════════════════════════╗
//! ║ Start                   ║   ← selected entry drawn in highlight colors
//! ║ Options                 ║
//! ║ About                   ║
//! ╚═════════════════════════╝
//! ↑ - Up  ↓ - Down  ↲ - Select  q - Quit
//! ```
//!
//! ## Key handling
//!
//! | Key          | Menu transition                          |
//! |--------------|------------------------------------------|
//! | `UP`         | select previous entry (wraps), redraw    |
//! | `DOWN`       | select next entry (wraps), redraw        |
//! | `ENTER`      | invoke the selected entry                |
//! | `'1'..='9'`  | invoke entry `digit - 1`                 |
//! | anything else| none                                     |
//!
//! Whatever the menu did, the key then goes through
//! [`ActionRegistry::dispatch`] once, so a menu transition and registry
//! bindings can both fire on the same key.
//!
//! ## Failure modes
//!
//! Navigation or selection on an empty menu is [`MenuError::Empty`]; a numeric
//! shortcut past the last entry is [`MenuError::OutOfRange`]. Neither touches
//! the selection.

use std::fmt;
use std::io;

use log::{debug, warn};
use unicode_width::UnicodeWidthChar;

use crate::core::action::Action;
use crate::core::bounded::{BoundedList, DEFAULT_CAPACITY, OverflowPolicy};
use crate::core::config::{DEFAULT_MENU_WIDTH, ResolvedConfig};
use crate::core::key::Key;
use crate::tui::component::Component;
use crate::tui::components::registry::ActionRegistry;
use crate::tui::surface::{Color, Surface};

/// Narrowest frame that still fits both borders and one label column.
pub const MIN_WIDTH: u16 = 4;

pub struct MenuEntry {
    pub label: String,
    action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyle {
    pub frame: Color,
    pub text: Color,
    pub highlight: (Color, Color),
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            frame: Color::Red,
            text: Color::Yellow,
            highlight: (Color::Black, Color::White),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuSettings {
    pub width: u16,
    pub capacity: usize,
    pub overflow: OverflowPolicy,
    pub origin: (u16, u16),
    pub style: MenuStyle,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_MENU_WIDTH,
            capacity: DEFAULT_CAPACITY,
            overflow: OverflowPolicy::Reject,
            origin: (0, 0),
            style: MenuStyle::default(),
        }
    }
}

impl From<&ResolvedConfig> for MenuSettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            width: config.menu_width,
            capacity: config.menu_capacity,
            overflow: config.menu_overflow,
            origin: config.origin,
            style: MenuStyle {
                frame: config.frame_color,
                text: config.text_color,
                highlight: config.highlight,
            },
        }
    }
}

/// What a key did at the menu level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Selection moved to this index and the frame was redrawn.
    Moved(usize),
    /// The entry at this index was invoked.
    Invoked(usize),
    /// No menu binding; the registry alone handled the key.
    Forwarded,
}

#[derive(Debug)]
pub enum MenuError {
    /// Navigation or selection on a menu with no entries.
    Empty,
    /// A shortcut named an entry past the end of the menu.
    OutOfRange { index: usize, count: usize },
    Io(io::Error),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::Empty => write!(f, "menu has no entries"),
            MenuError::OutOfRange { index, count } => {
                write!(f, "entry {index} out of range for menu of {count}")
            }
            MenuError::Io(e) => write!(f, "terminal I/O error: {e}"),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(e: io::Error) -> Self {
        MenuError::Io(e)
    }
}

pub struct Menu {
    origin: (u16, u16),
    width: u16,
    entries: BoundedList<MenuEntry>,
    selected: usize,
    registry: ActionRegistry,
    style: MenuStyle,
}

impl Menu {
    pub fn new(registry: ActionRegistry, settings: MenuSettings) -> Self {
        Self {
            origin: settings.origin,
            width: settings.width.max(MIN_WIDTH),
            entries: BoundedList::new(settings.capacity, settings.overflow),
            selected: 0,
            registry,
            style: settings.style,
        }
    }

    /// Append an entry. Returns `false` when the menu is full and the overflow
    /// policy is `Reject`.
    pub fn add_item(&mut self, label: impl Into<String>, action: impl Into<Action>) -> bool {
        let label = label.into();
        let added = self.entries.push(MenuEntry {
            label,
            action: action.into(),
        });
        if !added {
            debug!("Menu full ({} entries), item dropped", self.entries.capacity());
        }
        added
    }

    pub fn set_position(&mut self, x: u16, y: u16) {
        self.origin = (x, y);
    }

    pub fn position(&self) -> (u16, u16) {
        self.origin
    }

    /// Rows occupied by the frame: one per entry plus both borders.
    pub fn height(&self) -> u16 {
        u16::try_from(self.entries.len()).unwrap_or(u16::MAX).saturating_add(2)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ActionRegistry {
        &mut self.registry
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    pub fn move_up(&mut self) -> Result<usize, MenuError> {
        let count = self.non_empty_len()?;
        self.selected = (self.selected + count - 1) % count;
        Ok(self.selected)
    }

    pub fn move_down(&mut self) -> Result<usize, MenuError> {
        let count = self.non_empty_len()?;
        self.selected = (self.selected + 1) % count;
        Ok(self.selected)
    }

    /// Invoke the highlighted entry.
    pub fn select(&mut self) -> Result<usize, MenuError> {
        self.select_index(self.selected)
    }

    /// Invoke the entry at `index` without moving the highlight.
    pub fn select_index(&mut self, index: usize) -> Result<usize, MenuError> {
        let count = self.non_empty_len()?;
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(MenuError::OutOfRange { index, count })?;
        debug!("Invoking menu entry {} ({:?})", index, entry.label);
        entry.action.invoke();
        Ok(index)
    }

    fn non_empty_len(&self) -> Result<usize, MenuError> {
        match self.entries.len() {
            0 => Err(MenuError::Empty),
            n => Ok(n),
        }
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    /// Apply one key: at most one menu transition, then one registry pass.
    ///
    /// A menu-level error is returned only after the registry has seen the
    /// key.
    pub fn handle_key(
        &mut self,
        key: Key,
        surface: &mut dyn Surface,
    ) -> Result<Transition, MenuError> {
        let outcome = self.apply(key, surface);
        self.registry.dispatch(key);
        if let Err(ref e) = outcome {
            warn!("Key {} rejected by menu: {}", key, e);
        }
        outcome
    }

    fn apply(&mut self, key: Key, surface: &mut dyn Surface) -> Result<Transition, MenuError> {
        let transition = match key {
            Key::UP => Transition::Moved(self.move_up()?),
            Key::DOWN => Transition::Moved(self.move_down()?),
            Key::ENTER => Transition::Invoked(self.select()?),
            _ => match key.shortcut_index() {
                Some(index) => Transition::Invoked(self.select_index(index)?),
                None => Transition::Forwarded,
            },
        };
        if let Transition::Moved(_) = transition {
            self.render(surface)?;
            surface.flush()?;
        }
        Ok(transition)
    }

    /// One dispatch step: re-arm the run flag, block for a key, handle it.
    pub fn update(&mut self, surface: &mut dyn Surface) -> Result<Transition, MenuError> {
        self.registry.run_flag().rearm();
        let key = surface.read_key()?;
        self.handle_key(key, surface)
    }

    /// Draw the frame, then the registry legend beneath it.
    pub fn show(&self, surface: &mut dyn Surface) -> io::Result<()> {
        self.render(surface)?;
        self.registry.render(surface)?;
        surface.flush()
    }

    fn draw_border(
        &self,
        surface: &mut dyn Surface,
        left: &str,
        right: &str,
    ) -> io::Result<()> {
        let fill = "═".repeat(usize::from(self.width - 2));
        surface.set_foreground(self.style.frame)?;
        surface.print(left)?;
        surface.print(&fill)?;
        surface.print(right)?;
        surface.reset_color()
    }
}

impl Component for Menu {
    fn render(&self, surface: &mut dyn Surface) -> io::Result<()> {
        let (x, y) = self.origin;
        surface.set_cursor(x, y)?;

        self.draw_border(surface, "╔", "")?;
        let (right_x, _) = surface.cursor();
        surface.set_foreground(self.style.frame)?;
        surface.print("╗")?;
        surface.reset_color()?;
        surface.newline()?;

        let label_width = usize::from(self.width - 3);
        for (i, entry) in self.entries.iter().enumerate() {
            surface.set_x(x)?;
            surface.set_foreground(self.style.frame)?;
            surface.print("║ ")?;
            let (label, used) = fit_label(&entry.label, label_width);
            if i == self.selected {
                let (fg, bg) = self.style.highlight;
                surface.set_color(fg, bg)?;
            } else {
                surface.set_foreground(self.style.text)?;
            }
            surface.print(label)?;
            surface.reset_color()?;
            surface.print(&" ".repeat(label_width - used))?;
            surface.set_x(right_x)?;
            surface.set_foreground(self.style.frame)?;
            surface.print("║")?;
            surface.reset_color()?;
            surface.newline()?;
        }

        surface.set_x(x)?;
        self.draw_border(surface, "╚", "╝")?;
        surface.newline()
    }
}

/// Longest prefix of `label` that fits in `max` columns, and its width.
fn fit_label(label: &str, max: usize) -> (&str, usize) {
    let mut used = 0;
    for (pos, c) in label.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            return (&label[..pos], used);
        }
        used += w;
    }
    (label, used)
}
