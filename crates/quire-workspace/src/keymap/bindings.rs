use std::collections::HashMap;

use quire_config::keybinds::{normalize_key_name, parse_keybind, KeyBind, Modifier};
use quire_config::KeybindConfig;
use quire_layout::{DockCommand, LayoutPreset};

const MOD_CTRL: u8 = 0b0001;
const MOD_ALT: u8 = 0b0010;
const MOD_SHIFT: u8 = 0b0100;
const MOD_SUPER: u8 = 0b1000;

/// A canonical key press for map lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "W", "Right", "1").
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mut mods = 0u8;
        for m in &kb.modifiers {
            mods |= match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            };
        }
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from raw modifier state as reported by the UI toolkit.
    pub fn from_modifiers(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: &str) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        if super_key {
            mods |= MOD_SUPER;
        }
        Self {
            mods,
            key: normalize_key_name(key),
        }
    }
}

/// Maps key combinations to dock commands.
pub struct KeyBindings {
    bindings: HashMap<KeyCombo, DockCommand>,
}

impl KeyBindings {
    /// Invalid or empty bindings are logged and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, DockCommand); 8] = [
            (&config.focus_next, DockCommand::FocusNext),
            (&config.focus_prev, DockCommand::FocusPrev),
            (&config.close_pane, DockCommand::CloseFocused),
            (&config.float_pane, DockCommand::FloatFocused),
            (&config.dock_all, DockCommand::DockAll),
            (&config.preset_writing, DockCommand::ApplyPreset(LayoutPreset::Writing)),
            (&config.preset_review, DockCommand::ApplyPreset(LayoutPreset::Review)),
            (&config.preset_planning, DockCommand::ApplyPreset(LayoutPreset::Planning)),
        ];

        let mut bindings = HashMap::new();
        for (binding, command) in mappings {
            if binding.is_empty() {
                continue;
            }
            match parse_keybind(binding) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), command);
                }
                Err(e) => tracing::warn!("invalid keybind '{binding}': {e}"),
            }
        }
        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<&DockCommand> {
        self.bindings.get(combo)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
