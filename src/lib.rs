//! menukit: bordered console menus, key-binding legends, and the dispatch
//! loop that drives them.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{Action, BoundedList, Key, Locale, OverflowPolicy, RunFlag};
pub use crate::tui::components::{
    ActionRegistry, Menu, MenuError, MenuSettings, MenuStyle, NavigationHooks, RegistrySettings,
    Transition,
};
pub use crate::tui::surface::{Color, Surface};
