use std::time::Duration;

use quire_common::LayoutPaneId;
use quire_config::{KeybindConfig, WorkspaceConfig};
use quire_layout::LayoutPreset;

/// The parts of [`WorkspaceConfig`] the dock controller uses, resolved.
#[derive(Debug, Clone)]
pub struct WorkspaceSettings {
    pub default_preset: LayoutPreset,
    pub focus_order: Vec<LayoutPaneId>,
    pub debounce: Duration,
    pub min_floating_width: f64,
    pub min_floating_height: f64,
    pub gap: u32,
    pub keybinds: KeybindConfig,
}

impl From<&WorkspaceConfig> for WorkspaceSettings {
    fn from(config: &WorkspaceConfig) -> Self {
        Self {
            default_preset: config.layout.default_preset,
            focus_order: config.layout.resolved_focus_order(),
            debounce: Duration::from_millis(config.persistence.debounce_ms),
            min_floating_width: f64::from(config.floating.min_width),
            min_floating_height: f64::from(config.floating.min_height),
            gap: config.layout.gap,
            keybinds: config.keybinds.clone(),
        }
    }
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self::from(&WorkspaceConfig::default())
    }
}
