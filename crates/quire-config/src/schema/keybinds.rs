//! Workspace keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts for the dock.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Ctrl, Alt/Option,
/// Shift, Super. Multiple modifiers: "Ctrl+Shift+F".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub focus_next: String,
    pub focus_prev: String,
    pub close_pane: String,
    pub float_pane: String,
    pub dock_all: String,
    pub preset_writing: String,
    pub preset_review: String,
    pub preset_planning: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            focus_next: "Ctrl+Alt+Right".into(),
            focus_prev: "Ctrl+Alt+Left".into(),
            close_pane: "Ctrl+Alt+W".into(),
            float_pane: "Ctrl+Alt+F".into(),
            dock_all: "Ctrl+Alt+D".into(),
            preset_writing: "Ctrl+Alt+1".into(),
            preset_review: "Ctrl+Alt+2".into(),
            preset_planning: "Ctrl+Alt+3".into(),
        }
    }
}
