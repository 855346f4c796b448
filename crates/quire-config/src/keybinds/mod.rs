//! Keybind strings: parsing and validation.

mod parse;

pub use parse::{normalize_key_name, parse_keybind};

use std::collections::HashMap;

use quire_common::ConfigError;
use serde::{Deserialize, Serialize};

use crate::schema::KeybindConfig;

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Ctrl,
    /// Alt key (Option on macOS).
    Alt,
    Shift,
    /// Super key: Cmd on macOS, Win on Windows, Super on Linux.
    Super,
}

/// Zero or more modifiers and a key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl KeyBind {
    /// Modifiers in a fixed order, so `Alt+Ctrl+W` and `Ctrl+Alt+W` compare
    /// equal.
    pub fn canonical(&self) -> (Vec<Modifier>, String) {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort();
        (modifiers, self.key.clone())
    }
}

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("focus_next", &config.focus_next),
        ("focus_prev", &config.focus_prev),
        ("close_pane", &config.close_pane),
        ("float_pane", &config.float_pane),
        ("dock_all", &config.dock_all),
        ("preset_writing", &config.preset_writing),
        ("preset_review", &config.preset_review),
        ("preset_planning", &config.preset_planning),
    ]
}

/// Validate that every binding parses and no two resolve to the same key
/// combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<(Vec<Modifier>, String), (&str, &str)> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        if binding.is_empty() {
            continue;
        }
        let combo = parse_keybind(binding)
            .map_err(|e| {
                ConfigError::ValidationError(format!("keybinds.{name} '{binding}': {e}"))
            })?
            .canonical();
        if let Some((existing_name, existing)) = seen.get(&combo) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': same as '{existing}' assigned to '{existing_name}', also assigned to '{name}'"
            )));
        }
        seen.insert(combo, (name, binding));
    }

    Ok(())
}
