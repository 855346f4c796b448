//! Focus handling for DockWorkspace.

use quire_common::LayoutPaneId;

use super::DockWorkspace;

impl DockWorkspace {
    /// Set focus to a docked pane.
    pub fn focus_pane(&self, pane: LayoutPaneId) -> bool {
        let mut state = self.state();
        if !state.is_docked(pane) {
            return false;
        }
        state.focused = Some(pane);
        true
    }

    /// Focus the next docked pane in the configured focus order.
    pub fn focus_next(&self) -> bool {
        self.step_focus(1)
    }

    /// Focus the previous docked pane in the configured focus order.
    pub fn focus_prev(&self) -> bool {
        self.step_focus(-1)
    }

    /// Configured order filtered to docked panes.
    pub fn focus_cycle(&self) -> Vec<LayoutPaneId> {
        let state = self.state();
        self.settings
            .focus_order
            .iter()
            .copied()
            .filter(|p| state.is_docked(*p))
            .collect()
    }

    fn step_focus(&self, step: isize) -> bool {
        let cycle = self.focus_cycle();
        if cycle.is_empty() {
            return false;
        }
        let mut state = self.state();
        let len = cycle.len() as isize;
        let next = match state.focused.and_then(|f| cycle.iter().position(|p| *p == f)) {
            Some(idx) => cycle[(idx as isize + step).rem_euclid(len) as usize],
            None => cycle[0],
        };
        if state.focused == Some(next) {
            return false;
        }
        state.focused = Some(next);
        true
    }
}
