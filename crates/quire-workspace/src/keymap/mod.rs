//! Dock hotkeys: mapping key presses to
//! [`DockCommand`](quire_layout::DockCommand)s.
//!
//! Binding strings are parsed by `quire_config::keybinds`, which also
//! rejects duplicates when the config is validated.

mod bindings;

pub use bindings::{KeyBindings, KeyCombo};
pub use quire_config::keybinds::{parse_keybind, KeyBind, Modifier};
