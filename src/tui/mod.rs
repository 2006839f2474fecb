//! # TUI Adapter
//!
//! Terminal surfaces, the menu components, and the host dispatch loop.
//!
//! ## Dispatch loop
//!
//! ```text
//! show() ──▶ ┌─────────────── while run flag set ───────────────┐
//!            │ update(): read key → menu transition → registry  │
//!            │ Invoked? → host redraw                           │
//!            └──────────────────────────────────────────────────┘
//! ```
//!
//! Navigation keys redraw the frame inside `Menu::handle_key`. After an entry
//! is invoked the host redraws the whole screen, since the action may have
//! changed what is shown around the menu. The quit binding is the only way out
//! of the loop; the flag is checked between steps.

pub mod buffer;
pub mod component;
pub mod components;
pub mod event;
pub mod surface;
pub mod terminal;

use log::{debug, info};
use std::cell::RefCell;
use std::io::{self, IsTerminal};
use std::rc::Rc;

use crate::core::action::Action;
use crate::core::config::{ItemEntry, ResolvedConfig};
use crate::core::key::Key;
use crate::core::state::RunFlag;
use crate::tui::buffer::BufferSurface;
use crate::tui::components::{ActionRegistry, Menu, MenuError, Transition};
use crate::tui::surface::Surface;
use crate::tui::terminal::{CrosstermSurface, TerminalModeGuard};

/// Host loop: draw once, then step the menu until the run flag is cleared.
///
/// `redraw` draws the full screen; it runs at start and after each invoked
/// entry. Rejected keys (empty menu, shortcut out of range) are skipped.
/// Surface I/O errors end the loop.
pub fn run_loop<F>(menu: &mut Menu, surface: &mut dyn Surface, mut redraw: F) -> Result<(), MenuError>
where
    F: FnMut(&Menu, &mut dyn Surface) -> io::Result<()>,
{
    redraw(menu, surface)?;
    let run_flag = menu.registry().run_flag().clone();

    while run_flag.is_running() {
        match menu.update(surface) {
            Ok(Transition::Invoked(index)) => {
                debug!("Entry {} invoked", index);
                if run_flag.is_running() {
                    redraw(menu, surface)?;
                }
            }
            Ok(_) => {}
            Err(MenuError::Io(e)) => return Err(MenuError::Io(e)),
            Err(e) => debug!("Step skipped: {}", e),
        }
    }

    info!("Run flag cleared, leaving dispatch loop");
    Ok(())
}

/// Clear the surface and draw the menu with its legend.
pub fn show_screen(menu: &Menu, surface: &mut dyn Surface) -> io::Result<()> {
    surface.clear()?;
    menu.show(surface)
}

// ============================================================================
// Demo host
// ============================================================================

const SAMPLE_ITEMS: &[(&str, &str)] = &[
    ("Start", "Starting..."),
    ("Options", "Nothing to configure yet"),
    ("About", "menukit: bordered menus and key bindings for the console"),
];

type Status = Rc<RefCell<String>>;

/// Build the demo menu described by `config`. Selecting an entry writes its
/// message into `status`; Esc clears it.
pub fn build_menu(config: &ResolvedConfig, run_flag: RunFlag, status: &Status) -> Menu {
    let mut registry = ActionRegistry::new(config.into(), run_flag);
    let clear = status.clone();
    registry.register(Key::ESCAPE, "Esc", "Clear", move || clear.borrow_mut().clear());

    let mut menu = Menu::new(registry, config.into());

    let items: Vec<ItemEntry> = if config.items.is_empty() {
        SAMPLE_ITEMS
            .iter()
            .map(|(label, message)| ItemEntry {
                label: label.to_string(),
                message: Some(message.to_string()),
            })
            .collect()
    } else {
        config.items.clone()
    };

    for item in items {
        let message = item
            .message
            .unwrap_or_else(|| format!("Selected {}", item.label));
        let status = status.clone();
        let action = Action::new(move || *status.borrow_mut() = message.clone());
        menu.add_item(item.label, action);
    }

    info!("Menu built with {} entries", menu.len());
    menu
}

fn draw_demo_screen(menu: &Menu, surface: &mut dyn Surface, status: &Status) -> io::Result<()> {
    show_screen(menu, surface)?;
    let text = status.borrow();
    if !text.is_empty() {
        surface.newline()?;
        surface.newline()?;
        surface.print(&text)?;
    }
    surface.flush()
}

/// Run the demo host: interactive on a terminal, or a one-shot text preview.
pub fn launch(config: ResolvedConfig, preview: bool) -> io::Result<()> {
    let run_flag = RunFlag::new();
    let status: Status = Rc::new(RefCell::new(String::new()));
    let mut menu = build_menu(&config, run_flag, &status);

    if preview || !io::stdout().is_terminal() {
        for line in render_preview(&menu)? {
            println!("{line}");
        }
        return Ok(());
    }

    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut surface = CrosstermSurface::stdout();
    let result = run_loop(&mut menu, &mut surface, |menu, surface| {
        draw_demo_screen(menu, surface, &status)
    });

    match result {
        Ok(()) => Ok(()),
        Err(MenuError::Io(e)) => Err(e),
        Err(e) => Err(io::Error::other(e)),
    }
}

/// Draw the menu once into a headless buffer and return its rows.
pub fn render_preview(menu: &Menu) -> io::Result<Vec<String>> {
    let (x, y) = menu.position();
    let legend_rows = u16::try_from(menu.registry().len()).unwrap_or(u16::MAX);
    let width = x.saturating_add(menu.width()).max(80);
    let height = y
        .saturating_add(menu.height())
        .saturating_add(legend_rows)
        .saturating_add(1);

    let mut surface = BufferSurface::new(width, height);
    show_screen(menu, &mut surface)?;
    Ok(surface.lines())
}
