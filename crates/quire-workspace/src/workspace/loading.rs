//! Loading and resetting the persisted layout.

use quire_common::LayoutPaneId;
use quire_layout::{normalize, sanitize_with_fallback};
use tracing::{info, warn};

use super::types::WorkspaceState;
use super::DockWorkspace;

impl DockWorkspace {
    /// Replace the current state with the persisted layout.
    ///
    /// Floating state comes only from the host's live windows; persisted
    /// floating bounds are remembered for later float requests but never
    /// open a window. Any failure leaves the default preset.
    pub async fn load(&self) {
        let persisted = match self.bridge.load_layout(&self.project).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(project = %self.project.display(), "could not load layout, using default: {e}");
                None
            }
        };
        let live = match self.bridge.list_floating_panes(&self.project).await {
            Ok(live) => live,
            Err(e) => {
                warn!(project = %self.project.display(), "could not list floating panes: {e}");
                Vec::new()
            }
        };

        let floating: Vec<LayoutPaneId> = live
            .iter()
            .map(|d| d.id)
            .filter(|id| self.catalogue.contains(id))
            .collect();

        let tree = match &persisted {
            Some(payload) => sanitize_with_fallback(
                &payload.layout,
                &self.catalogue,
                &floating,
                self.settings.default_preset,
            ),
            None => normalize(self.settings.default_preset.tree(), &self.catalogue, &floating),
        };

        let mut state = self.state();
        let work_area = state.work_area;
        *state = WorkspaceState {
            work_area,
            floating: floating.iter().copied().collect(),
            ..WorkspaceState::default()
        };
        if let Some(payload) = &persisted {
            for descriptor in &payload.floating_panes {
                if self.catalogue.contains(&descriptor.id) && descriptor.bounds.is_usable() {
                    state.remembered.insert(descriptor.id, descriptor.bounds);
                }
            }
        }
        for descriptor in &live {
            if self.catalogue.contains(&descriptor.id) {
                state.remembered.insert(descriptor.id, descriptor.bounds);
            }
        }
        state.replace_tree(tree);

        info!(
            project = %self.project.display(),
            docked = state.tree.as_ref().map_or(0, |t| t.pane_count()),
            floating = state.floating.len(),
            restored = persisted.is_some(),
            "workspace loaded"
        );
    }

    /// Forget the persisted layout and go back to the default preset.
    /// Floating windows stay open; remembered bounds are cleared.
    pub async fn reset_layout(&self) {
        self.saver.discard();
        // Waits out a save already in progress so it cannot recreate the file.
        self.saver.flush().await;
        if let Err(e) = self.bridge.reset_layout(&self.project).await {
            warn!(project = %self.project.display(), "could not reset persisted layout: {e}");
        }

        let mut state = self.state();
        let floating = state.floating_list();
        state.remembered.clear();
        state.replace_tree(normalize(
            self.settings.default_preset.tree(),
            &self.catalogue,
            &floating,
        ));
        info!(project = %self.project.display(), preset = %self.settings.default_preset, "layout reset");
    }
}
