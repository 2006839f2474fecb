//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::action::Action;
use crate::core::state::RunFlag;
use crate::tui::components::menu::{Menu, MenuSettings};
use crate::tui::components::registry::{ActionRegistry, RegistrySettings};

/// Frame width used by test menus; narrow enough to assert on whole rows.
pub const TEST_WIDTH: u16 = 20;

/// An action that counts its invocations.
pub fn counting_action() -> (Action, Rc<Cell<usize>>) {
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    (Action::new(move || counter.set(counter.get() + 1)), hits)
}

/// An action that appends `name` to a shared log, for ordering assertions.
pub fn recording_action(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Action {
    let log = log.clone();
    Action::new(move || log.borrow_mut().push(name))
}

/// A menu with the given entries, a fresh run flag and default registry.
pub fn menu_with(entries: Vec<(&str, Action)>) -> Menu {
    let registry = ActionRegistry::new(RegistrySettings::default(), RunFlag::new());
    let settings = MenuSettings {
        width: TEST_WIDTH,
        ..Default::default()
    };
    let mut menu = Menu::new(registry, settings);
    for (label, action) in entries {
        menu.add_item(label, action);
    }
    menu
}

/// A menu of no-op entries.
pub fn test_menu(labels: &[&str]) -> Menu {
    menu_with(labels.iter().map(|l| (*l, Action::noop())).collect())
}
