//! # Bounded Lists
//!
//! Menus and registries hold their entries in a `BoundedList`: an ordered,
//! growable sequence with a capacity ceiling. What happens at the ceiling is
//! the list's [`OverflowPolicy`], chosen at construction.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Pushes past the ceiling are dropped without error.
    #[default]
    Reject,
    /// Pushes past the ceiling are kept and the ceiling moves up.
    Grow,
}

#[derive(Debug)]
pub struct BoundedList<T> {
    items: Vec<T>,
    capacity: usize,
    policy: OverflowPolicy,
}

impl<T> BoundedList<T> {
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            policy,
        }
    }

    /// Append an item. Returns `false` when the item was dropped.
    pub fn push(&mut self, item: T) -> bool {
        if self.items.len() >= self.capacity {
            match self.policy {
                OverflowPolicy::Reject => {
                    trace!("List full at {} entries, ignoring push", self.capacity);
                    return false;
                }
                OverflowPolicy::Grow => {
                    self.capacity = self.items.len() + 1;
                    debug!("List ceiling raised to {}", self.capacity);
                }
            }
        }
        self.items.push(item);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> Default for BoundedList<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, OverflowPolicy::default())
    }
}
