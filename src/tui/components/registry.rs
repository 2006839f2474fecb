//! # Action Registry
//!
//! Global key bindings shown as a legend under a menu. Each binding maps a
//! trigger [`Key`] to a short label, a description, and an [`Action`].
//!
//! ## Default bindings
//!
//! Every registry starts with four bindings, registered in this order:
//!
//! | Key     | Label | Action                                  |
//! |---------|-------|-----------------------------------------|
//! | `UP`    | ↑     | host hook (no-op by default)            |
//! | `DOWN`  | ↓     | host hook (no-op by default)            |
//! | `ENTER` | ↲     | host hook (no-op by default)            |
//! | `'q'`   | q     | clears the [`RunFlag`]                  |
//!
//! Descriptions come from the configured [`Locale`]. The capacity is raised to
//! at least [`DEFAULT_BINDINGS`] so the defaults always fit.
//!
//! ## Dispatch
//!
//! `dispatch` fires *every* binding whose trigger matches, in registration
//! order. Duplicate triggers are neither detected nor collapsed.

use std::io;

use log::{debug, trace};

use crate::core::action::Action;
use crate::core::bounded::{BoundedList, DEFAULT_CAPACITY, OverflowPolicy};
use crate::core::config::{DEFAULT_PER_ROW, ResolvedConfig};
use crate::core::key::Key;
use crate::core::locale::Locale;
use crate::core::state::RunFlag;
use crate::tui::component::Component;
use crate::tui::surface::{Color, Surface};

/// Number of bindings every registry starts with.
pub const DEFAULT_BINDINGS: usize = 4;

pub struct SettingEntry {
    pub trigger: Key,
    pub short_label: String,
    pub description: String,
    action: Action,
}

#[derive(Debug, Clone)]
pub struct RegistrySettings {
    /// Ceiling on bindings; never below [`DEFAULT_BINDINGS`].
    pub capacity: usize,
    pub overflow: OverflowPolicy,
    /// Legend entries per row; 0 is treated as 1.
    pub per_row: usize,
    pub locale: Locale,
    /// Colors of the short labels in the legend.
    pub key_style: (Color, Color),
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            overflow: OverflowPolicy::Reject,
            per_row: DEFAULT_PER_ROW,
            locale: Locale::default(),
            key_style: (Color::Black, Color::White),
        }
    }
}

impl From<&ResolvedConfig> for RegistrySettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            capacity: config.legend_capacity,
            overflow: config.legend_overflow,
            per_row: config.legend_per_row,
            locale: config.locale,
            key_style: config.highlight,
        }
    }
}

/// Host-supplied actions for the up/down/confirm default bindings.
#[derive(Debug, Default)]
pub struct NavigationHooks {
    pub up: Action,
    pub down: Action,
    pub confirm: Action,
}

pub struct ActionRegistry {
    entries: BoundedList<SettingEntry>,
    per_row: usize,
    key_style: (Color, Color),
    run_flag: RunFlag,
}

impl ActionRegistry {
    pub fn new(settings: RegistrySettings, run_flag: RunFlag) -> Self {
        Self::with_hooks(settings, run_flag, NavigationHooks::default())
    }

    pub fn with_hooks(settings: RegistrySettings, run_flag: RunFlag, hooks: NavigationHooks) -> Self {
        let mut registry = Self {
            entries: BoundedList::new(
                settings.capacity.max(DEFAULT_BINDINGS),
                settings.overflow,
            ),
            per_row: settings.per_row.max(1),
            key_style: settings.key_style,
            run_flag: run_flag.clone(),
        };

        let labels = settings.locale.binding_labels();
        registry.register(Key::UP, labels.up.0, labels.up.1, hooks.up);
        registry.register(Key::DOWN, labels.down.0, labels.down.1, hooks.down);
        registry.register(Key::ENTER, labels.confirm.0, labels.confirm.1, hooks.confirm);
        registry.register(
            Key::from('q'),
            labels.quit.0,
            labels.quit.1,
            Action::new(move || {
                debug!("Quit binding fired");
                run_flag.stop();
            }),
        );
        registry
    }

    /// Append a binding. Returns `false` when the registry is full and the
    /// overflow policy is `Reject`.
    pub fn register(
        &mut self,
        trigger: Key,
        short_label: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<Action>,
    ) -> bool {
        self.entries.push(SettingEntry {
            trigger,
            short_label: short_label.into(),
            description: description.into(),
            action: action.into(),
        })
    }

    /// Invoke every binding whose trigger is `key`, in registration order.
    pub fn dispatch(&mut self, key: Key) {
        let mut fired = 0usize;
        for entry in self.entries.iter_mut().filter(|e| e.trigger == key) {
            entry.action.invoke();
            fired += 1;
        }
        trace!("Dispatched {} to {} binding(s)", key, fired);
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

    pub fn entries(&self) -> impl Iterator<Item = &SettingEntry> {
        self.entries.iter()
    }

    pub fn run_flag(&self) -> &RunFlag {
        &self.run_flag
    }
}

impl Component for ActionRegistry {
    /// Draw the legend at the current cursor: `<label> - <description>` per
    /// binding, `per_row` bindings to a row.
    fn render(&self, surface: &mut dyn Surface) -> io::Result<()> {
        let (key_fg, key_bg) = self.key_style;
        for (i, entry) in self.entries.iter().enumerate() {
            surface.set_color(key_fg, key_bg)?;
            surface.print(&entry.short_label)?;
            surface.reset_color()?;
            surface.print(&format!(" - {} \t", entry.description))?;
            if (i + 1) % self.per_row == 0 {
                surface.newline()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{counting_action, recording_action};
    use crate::tui::buffer::BufferSurface;
    use ratatui::style::Color as CellColor;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn registry() -> ActionRegistry {
        ActionRegistry::new(RegistrySettings::default(), RunFlag::new())
    }

    #[test]
    fn test_fresh_registry_has_four_defaults() {
        let registry = registry();
        assert_eq!(registry.len(), 4);
        let codes: Vec<u32> = registry.entries().map(|e| e.trigger.code()).collect();
        assert_eq!(codes, vec![72, 80, 13, 'q' as u32]);
        let labels: Vec<&str> = registry.entries().map(|e| e.description.as_str()).collect();
        assert_eq!(labels, vec!["Up", "Down", "Select", "Quit"]);
    }

    #[test]
    fn test_quit_clears_run_flag() {
        let flag = RunFlag::new();
        let mut registry = ActionRegistry::new(RegistrySettings::default(), flag.clone());
        registry.dispatch(Key::from('q'));
        assert!(!flag.is_running());
        assert!(!registry.run_flag().is_running());
    }

    #[test]
    fn test_default_navigation_bindings_leave_flag_alone() {
        let flag = RunFlag::new();
        let mut registry = ActionRegistry::new(RegistrySettings::default(), flag.clone());
        registry.dispatch(Key::UP);
        registry.dispatch(Key::DOWN);
        registry.dispatch(Key::ENTER);
        assert!(flag.is_running());
    }

    #[test]
    fn test_host_hooks_fire_on_their_keys() {
        let (up, up_hits) = counting_action();
        let (confirm, confirm_hits) = counting_action();
        let hooks = NavigationHooks {
            up,
            confirm,
            ..Default::default()
        };
        let mut registry =
            ActionRegistry::with_hooks(RegistrySettings::default(), RunFlag::new(), hooks);

        registry.dispatch(Key::UP);
        registry.dispatch(Key::UP);
        registry.dispatch(Key::ENTER);
        assert_eq!(up_hits.get(), 2);
        assert_eq!(confirm_hits.get(), 1);
    }

    #[test]
    fn test_unmatched_key_invokes_nothing() {
        let mut registry = registry();
        let (action, hits) = counting_action();
        registry.register(Key::from('x'), "x", "Extra", action);

        registry.dispatch(Key::from('z'));
        // Typed 'H' shares code 72 with UP but is not the arrow key
        registry.dispatch(Key::from('H'));
        assert_eq!(hits.get(), 0);
        assert!(registry.run_flag().is_running());
    }

    #[test]
    fn test_duplicate_triggers_all_fire_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = registry();
        registry.register(Key::from('s'), "s", "Save", recording_action(&log, "first"));
        registry.register(Key::from('t'), "t", "Other", recording_action(&log, "other"));
        registry.register(Key::from('s'), "s", "Save again", recording_action(&log, "second"));

        registry.dispatch(Key::from('s'));
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_register_past_capacity_is_noop() {
        let settings = RegistrySettings {
            capacity: 5,
            ..Default::default()
        };
        let mut registry = ActionRegistry::new(settings, RunFlag::new());
        let (action, hits) = counting_action();
        assert!(registry.register(Key::from('a'), "a", "A", Action::noop()));
        assert!(!registry.register(Key::from('b'), "b", "B", action));
        assert!(!registry.register(Key::from('c'), "c", "C", Action::noop()));
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.capacity(), 5);

        registry.dispatch(Key::from('b'));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_grow_policy_accepts_past_capacity() {
        let settings = RegistrySettings {
            capacity: 4,
            overflow: OverflowPolicy::Grow,
            ..Default::default()
        };
        let mut registry = ActionRegistry::new(settings, RunFlag::new());
        assert!(registry.register(Key::from('a'), "a", "A", Action::noop()));
        assert!(registry.register(Key::from('b'), "b", "B", Action::noop()));
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_small_capacity_still_holds_defaults() {
        for capacity in [0, 2] {
            let flag = RunFlag::new();
            let settings = RegistrySettings {
                capacity,
                ..Default::default()
            };
            let mut registry = ActionRegistry::new(settings, flag.clone());
            assert_eq!(registry.len(), DEFAULT_BINDINGS);
            assert_eq!(registry.capacity(), DEFAULT_BINDINGS);
            assert!(!registry.register(Key::from('x'), "x", "Extra", Action::noop()));

            registry.dispatch(Key::from('q'));
            assert!(!flag.is_running());
        }
    }

    #[test]
    fn test_vietnamese_locale_labels() {
        let settings = RegistrySettings {
            locale: Locale::Vietnamese,
            ..Default::default()
        };
        let registry = ActionRegistry::new(settings, RunFlag::new());
        let descriptions: Vec<&str> = registry.entries().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Lên", "Xuống", "Chọn", "Thoát"]);
    }

    #[test]
    fn test_render_breaks_rows_after_per_row_entries() {
        let settings = RegistrySettings {
            per_row: 2,
            ..Default::default()
        };
        let mut registry = ActionRegistry::new(settings, RunFlag::new());
        registry.register(Key::from('h'), "h", "Help", Action::noop());

        let mut surface = BufferSurface::new(60, 5);
        registry.render(&mut surface).unwrap();

        let lines = surface.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("↑ - Up"));
        assert!(lines[0].contains("↓ - Down"));
        assert!(lines[1].starts_with("↲ - Select"));
        assert!(lines[1].contains("q - Quit"));
        assert!(lines[2].starts_with("h - Help"));
        // Last row is partial, so no trailing line break
        assert_eq!(surface.cursor().1, 2);
    }

    #[test]
    fn test_render_highlights_only_short_labels() {
        let mut surface = BufferSurface::new(60, 2);
        registry().render(&mut surface).unwrap();

        assert_eq!(surface.colors_at(0, 0), Some((CellColor::Black, CellColor::Gray)));
        assert_eq!(surface.colors_at(2, 0), Some((CellColor::Reset, CellColor::Reset)));
    }

    #[test]
    fn test_default_per_row_puts_defaults_on_one_row() {
        let mut surface = BufferSurface::new(80, 3);
        registry().render(&mut surface).unwrap();
        assert_eq!(surface.lines().len(), 1);
        assert_eq!(surface.cursor(), (0, 1));
    }
}
