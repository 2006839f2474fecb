//! # Core Types
//!
//! The value types the menu engine is built from. Nothing in here touches a
//! terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Action (callable)    │
//!                    │  • Key (key codes)      │
//!                    │  • RunFlag (host loop)  │
//!                    │  • BoundedList          │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │          TUI            │
//!                    │  Menu, ActionRegistry,  │
//!                    │  Surface, dispatch loop │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`action`]: `Action`, the zero-argument callable bound to items and keys
//! - [`key`]: `Key`, integer key codes with the extended-key flag
//! - [`state`]: `RunFlag`, the shared "keep running" switch
//! - [`bounded`]: `BoundedList`, capacity ceiling plus overflow policy
//! - [`locale`]: labels for the default key bindings
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod bounded;
pub mod config;
pub mod key;
pub mod locale;
pub mod state;

pub use action::Action;
pub use bounded::{BoundedList, OverflowPolicy};
pub use key::Key;
pub use locale::Locale;
pub use state::RunFlag;
