//! Open/closed state of the mobile navigation menu.

use crate::components::icons;
use leptos::prelude::*;

/// The mobile menu's single boolean, held in a reactive signal.
///
/// `Copy`, so it can be moved into as many event handlers and `Show`
/// conditions as the nav bar needs.
#[derive(Debug, Clone, Copy)]
pub struct MenuToggle {
    open: RwSignal<bool>,
}

impl MenuToggle {
    pub fn new(initially_open: bool) -> Self {
        Self {
            open: RwSignal::new(initially_open),
        }
    }

    /// Tracked read: re-runs the surrounding effect or view closure on change.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        if self.open.get_untracked() {
            self.open.set(false);
        }
    }

    /// Icon for the toggle button: X while open, hamburger while closed.
    pub fn icon(&self) -> &'static [&'static str] {
        if self.is_open() { icons::X } else { icons::MENU }
    }
}

impl Default for MenuToggle {
    fn default() -> Self {
        Self::new(false)
    }
}
