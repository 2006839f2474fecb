//! # Actions
//!
//! Everything a user can trigger, whether by picking a menu item or pressing a
//! registry key, is an `Action`: a boxed closure taking no arguments and
//! returning nothing.
//!
//! Closures capture whatever host state they need (a status line, a counter,
//! the [`RunFlag`](super::state::RunFlag)), so no global hooks are required.
//!
//! ```text
//! keypress  →  Menu / ActionRegistry  →  Action::invoke()
//! ```

use std::fmt;

pub struct Action(Box<dyn FnMut()>);

impl Action {
    pub fn new(f: impl FnMut() + 'static) -> Self {
        Self(Box::new(f))
    }

    /// An action that does nothing. Placeholder for bindings the host has not
    /// decided on yet.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn invoke(&mut self) {
        (self.0)()
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

impl<F: FnMut() + 'static> From<F> for Action {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
