//! Docked and hidden transitions, split resizing and presets.

use quire_common::LayoutPaneId;
use quire_layout::{normalize, LayoutPreset};
use tracing::debug;

use super::DockWorkspace;

impl DockWorkspace {
    /// Close a docked pane's tile. The pane becomes hidden.
    pub fn close_pane(&self, pane: LayoutPaneId) -> bool {
        let mut state = self.state();
        if state.pending.contains(&pane) || !state.undock(pane) {
            return false;
        }
        debug!(pane = %pane, "pane hidden");
        self.persist(&state);
        true
    }

    pub fn close_focused(&self) -> bool {
        match self.focused() {
            Some(pane) => self.close_pane(pane),
            None => false,
        }
    }

    /// Bring a hidden pane back into the dock and focus it.
    ///
    /// A pane still marked floating is checked against the host first; if
    /// its window is gone the pane is docked and focused like a hidden one.
    pub async fn show_pane(&self, pane: LayoutPaneId) -> bool {
        if !self.catalogue.contains(&pane) {
            return false;
        }
        if self.revalidate_floating(pane).await {
            let mut state = self.state();
            state.focused = Some(pane);
            debug!(pane = %pane, "stale floating pane shown");
            self.persist(&state);
            return true;
        }
        let mut state = self.state();
        if state.is_docked(pane) || state.floating.contains(&pane) {
            return false;
        }
        state.dock(pane);
        state.focused = Some(pane);
        debug!(pane = %pane, "pane shown");
        self.persist(&state);
        true
    }

    /// Grow (positive `delta`) or shrink a docked pane within its parent
    /// split, in percentage points.
    pub fn resize_split(&self, pane: LayoutPaneId, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let mut state = self.state();
        let resized = state
            .tree
            .as_mut()
            .is_some_and(|tree| tree.adjust_split(pane, delta));
        if resized {
            self.persist(&state);
        }
        resized
    }

    /// Replace the docked tree with `preset`, leaving floating panes where
    /// they are.
    pub fn apply_preset(&self, preset: LayoutPreset) -> bool {
        let mut state = self.state();
        let floating = state.floating_list();
        let tree = normalize(preset.tree(), &self.catalogue, &floating);
        state.focused = None;
        state.replace_tree(tree);
        debug!(preset = %preset, "preset applied");
        self.persist(&state);
        true
    }
}
