//! Dock layout preferences.

use quire_common::LayoutPaneId;
use quire_layout::LayoutPreset;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Preset used for new projects and after a reset.
    pub default_preset: LayoutPreset,
    /// Order in which focus-cycle hotkeys visit panes. Names are catalogue
    /// ids; unknown names are ignored.
    pub focus_order: Vec<String>,
    /// Gap between docked panes in pixels (valid range: 0-20).
    pub gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_preset: LayoutPreset::default(),
            focus_order: LayoutPaneId::ALL
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
            gap: 6,
        }
    }
}

impl LayoutConfig {
    /// The focus order as catalogue ids, unknown names skipped, each pane
    /// once. Panes missing from the list are appended in catalogue order so
    /// every docked pane stays reachable.
    pub fn resolved_focus_order(&self) -> Vec<LayoutPaneId> {
        let mut order: Vec<LayoutPaneId> = Vec::new();
        for name in &self.focus_order {
            match name.parse::<LayoutPaneId>() {
                Ok(id) if !order.contains(&id) => order.push(id),
                Ok(_) => {}
                Err(_) => tracing::warn!("ignoring unknown pane '{name}' in layout.focus_order"),
            }
        }
        for id in LayoutPaneId::ALL {
            if !order.contains(&id) {
                order.push(id);
            }
        }
        order
    }
}
