//! # Run State
//!
//! The only state shared between the menu engine and the host program: a
//! single "keep running" switch.
//!
//! ```text
//! RunFlag ──clone──▶ quit Action   (clears it)
//!    │
//!    └──────clone──▶ host loop     (polls it every iteration)
//! ```
//!
//! The flag starts out set. Only the quit binding of an
//! [`ActionRegistry`](crate::tui::components::registry::ActionRegistry) clears
//! it; `Menu::update` re-arms it at the start of each step. It is an `Rc`, so
//! it cannot leave the thread that drives the terminal.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct RunFlag(Rc<Cell<bool>>);

impl RunFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_running(&self) -> bool {
        self.0.get()
    }

    /// Clear the flag so the host loop exits after the current step.
    pub fn stop(&self) {
        self.0.set(false);
    }

    pub(crate) fn rearm(&self) {
        self.0.set(true);
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}
