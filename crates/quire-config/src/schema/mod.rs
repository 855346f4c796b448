//! Config schema: the root `WorkspaceConfig` and its sections.

mod floating;
mod keybinds;
mod layout;

pub use floating::{FloatingConfig, PersistenceConfig};
pub use keybinds::KeybindConfig;
pub use layout::LayoutConfig;

use serde::{Deserialize, Serialize};

/// Root of `workspace.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub persistence: PersistenceConfig,
    pub floating: FloatingConfig,
    pub layout: LayoutConfig,
    pub keybinds: KeybindConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: WorkspaceConfig = toml::from_str("").unwrap();
        assert_eq!(config.persistence.debounce_ms, 400);
        assert_eq!(config.floating.default_width, 640);
        assert_eq!(config.layout.default_preset, quire_layout::LayoutPreset::Writing);
        assert_eq!(config.keybinds.focus_next, "Ctrl+Alt+Right");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: WorkspaceConfig = toml::from_str(
            r#"
[floating]
default_width = 800

[layout]
default_preset = "planning"
"#,
        )
        .unwrap();
        assert_eq!(config.floating.default_width, 800);
        assert_eq!(config.floating.default_height, 420);
        assert_eq!(config.layout.default_preset, quire_layout::LayoutPreset::Planning);
        assert_eq!(config.persistence.debounce_ms, 400);
    }
}
