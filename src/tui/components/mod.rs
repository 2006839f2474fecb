//! # TUI Components
//!
//! ## Component Architecture
//!
//! Both components own their state and draw themselves through the
//! [`Component`](super::component::Component) trait onto any
//! [`Surface`](super::surface::Surface):
//!
//! - `ActionRegistry`: global key bindings, drawn as a legend
//! - `Menu`: bordered selectable list; owns one `ActionRegistry`
//!
//! State transitions (`move_up`, `select_index`, `dispatch`, …) never draw.
//! Drawing happens in `render`/`show`, and in `Menu::handle_key` after a
//! navigation key.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs       (this file)
//! ├── registry.rs  (ActionRegistry, legend)
//! └── menu.rs      (Menu, navigation and dispatch)
//! ```

pub mod menu;
pub mod registry;

pub use menu::{Menu, MenuError, MenuSettings, MenuStyle, Transition};
pub use registry::{ActionRegistry, DEFAULT_BINDINGS, NavigationHooks, RegistrySettings};
