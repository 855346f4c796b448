//! Dock workspace controller.
//!
//! Owns the docked split tree for one project, the hidden-pane list and
//! the floating set, and talks to the host through a
//! [`LayoutBridge`](quire_bridge::LayoutBridge). Every failure at the
//! bridge is logged and degraded; nothing here surfaces an error to the
//! user.

pub mod keymap;
mod persist;
mod settings;
mod workspace;

#[cfg(test)]
mod testing;

pub use keymap::{parse_keybind, KeyBind, KeyBindings, KeyCombo, Modifier};
pub use persist::DebouncedSaver;
pub use settings::WorkspaceSettings;
pub use workspace::{DockWorkspace, PaneFrame, PaneState};
