//! Command dispatch and frame computation.

use quire_common::Rect;
use quire_layout::{DockCommand, LayoutEngine};
use tracing::debug;

use super::{DockWorkspace, PaneFrame};
use crate::keymap::KeyCombo;

impl DockWorkspace {
    /// Run a dock command. Returns whether anything changed.
    pub async fn execute(&self, command: DockCommand) -> bool {
        debug!(?command, "dock command");
        match command {
            DockCommand::FocusNext => self.focus_next(),
            DockCommand::FocusPrev => self.focus_prev(),
            DockCommand::Focus(pane) => self.focus_pane(pane),
            DockCommand::CloseFocused => self.close_focused(),
            DockCommand::FloatFocused => match self.focused() {
                Some(pane) => self.float_pane(pane).await,
                None => false,
            },
            DockCommand::Show(pane) => self.show_pane(pane).await,
            DockCommand::DockAll => self.dock_all_floating().await > 0,
            DockCommand::Resize(delta) => match self.focused() {
                Some(pane) => self.resize_split(pane, delta),
                None => false,
            },
            DockCommand::ApplyPreset(preset) => self.apply_preset(preset),
        }
    }

    /// Look up a key press in the configured bindings and run it.
    pub async fn handle_key(&self, combo: &KeyCombo) -> bool {
        match self.bindings.lookup(combo).cloned() {
            Some(command) => self.execute(command).await,
            None => false,
        }
    }

    /// Rectangles of the docked panes inside `viewport`.
    pub fn pane_frames(&self, viewport: Rect) -> Vec<PaneFrame> {
        let engine = LayoutEngine {
            gap: self.settings.gap,
            outer_padding: 0,
        };
        let state = self.state();
        let Some(tree) = state.tree.as_ref() else {
            return Vec::new();
        };
        engine
            .compute(tree, viewport)
            .into_iter()
            .map(|(pane, rect)| PaneFrame {
                pane,
                rect,
                focused: state.focused == Some(pane),
            })
            .collect()
    }
}
