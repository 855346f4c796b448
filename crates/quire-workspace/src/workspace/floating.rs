//! Floating transitions and host window events.

use std::collections::BTreeSet;
use std::sync::Arc;

use quire_bridge::{BridgeEvent, CloseFloatingPaneRequest, OpenFloatingPaneRequest};
use quire_common::{LayoutPaneId, Rect};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::types::WorkspaceState;
use super::DockWorkspace;

impl DockWorkspace {
    /// Move a docked pane into its own window.
    ///
    /// The pane leaves the tree at once. A second request for the same pane
    /// while the first is in flight is ignored. If the host cannot open the
    /// window the pane goes back where it was. A pane whose window vanished
    /// without a close event is docked first and then opened afresh.
    pub async fn float_pane(&self, pane: LayoutPaneId) -> bool {
        self.revalidate_floating(pane).await;
        let (before, after, bounds) = {
            let mut state = self.state();
            if state.pending.contains(&pane)
                || state.floating.contains(&pane)
                || !state.is_docked(pane)
            {
                debug!(pane = %pane, "float ignored");
                return false;
            }
            let before = (state.tree.clone(), state.focused);
            state.undock(pane);
            state.floating.insert(pane);
            state.pending.insert(pane);
            self.persist(&state);
            let bounds = self.request_bounds(&state, pane);
            let after = state.tree.clone();
            (before, after, bounds)
        };

        let request = OpenFloatingPaneRequest {
            project_path: self.project.clone(),
            pane_id: pane,
            bounds,
        };
        let result = self.bridge.open_floating_pane(request).await;

        let mut state = self.state();
        state.pending.remove(&pane);
        match result {
            Ok(result) => {
                if let Some(clamped) = result.clamped {
                    state.remembered.insert(pane, clamped);
                    self.persist(&state);
                }
                info!(pane = %pane, opened = result.opened, "pane floated");
                true
            }
            Err(e) => {
                warn!(pane = %pane, "could not open floating window: {e}");
                state.floating.remove(&pane);
                if state.tree == after {
                    state.tree = before.0;
                    state.focused = before.1;
                } else {
                    state.dock(pane);
                }
                self.persist(&state);
                false
            }
        }
    }

    /// Close a pane's floating window and put it back in the dock.
    pub async fn dock_pane(&self, pane: LayoutPaneId) -> bool {
        {
            let mut state = self.state();
            if state.pending.contains(&pane) || !state.floating.contains(&pane) {
                return false;
            }
            state.pending.insert(pane);
        }

        let request = CloseFloatingPaneRequest {
            project_path: self.project.clone(),
            pane_id: pane,
        };
        let result = self.bridge.close_floating_pane(request).await;

        let mut state = self.state();
        state.pending.remove(&pane);
        if let Err(e) = result {
            warn!(pane = %pane, "could not close floating window: {e}");
            return false;
        }
        state.floating.remove(&pane);
        state.dock(pane);
        state.focused = Some(pane);
        info!(pane = %pane, "pane docked");
        self.persist(&state);
        true
    }

    /// Dock every floating pane. Returns how many came back.
    pub async fn dock_all_floating(&self) -> usize {
        let panes: Vec<LayoutPaneId> = {
            let state = self.state();
            state.floating.difference(&state.pending).copied().collect()
        };
        let mut docked = 0;
        for pane in panes {
            if self.dock_pane(pane).await {
                docked += 1;
            }
        }
        docked
    }

    /// The user closed a floating window from the window chrome.
    pub fn on_floating_closed(&self, pane: LayoutPaneId) -> bool {
        let mut state = self.state();
        if !state.floating.remove(&pane) {
            return false;
        }
        state.dock(pane);
        debug!(pane = %pane, "floating window closed, pane docked");
        self.persist(&state);
        true
    }

    /// A floating window reported new geometry.
    pub fn on_floating_moved(&self, pane: LayoutPaneId, bounds: Rect) -> bool {
        if !bounds.is_usable() {
            return false;
        }
        let mut state = self.state();
        if !state.floating.contains(&pane) || state.remembered.get(&pane) == Some(&bounds) {
            return false;
        }
        state.remembered.insert(pane, bounds);
        self.persist(&state);
        true
    }

    /// Apply a host event. Events for other projects are ignored.
    pub fn apply_event(&self, event: &BridgeEvent) -> bool {
        if event.project_path() != &self.project {
            return false;
        }
        match event {
            BridgeEvent::FloatingPaneClosed { pane_id, .. } => self.on_floating_closed(*pane_id),
            BridgeEvent::FloatingPaneMoved {
                pane_id, bounds, ..
            } => self.on_floating_moved(*pane_id, *bounds),
        }
    }

    /// Follow host events until the bus closes or the workspace is dropped.
    /// Missed events are recovered by re-listing the live windows.
    pub fn listen(self: &Arc<Self>, mut events: broadcast::Receiver<BridgeEvent>) -> JoinHandle<()> {
        let workspace = Arc::downgrade(self);
        tokio::spawn(async move {
            loop {
                let received = events.recv().await;
                let Some(workspace) = workspace.upgrade() else {
                    break;
                };
                match received {
                    Ok(event) => {
                        workspace.apply_event(&event);
                    }
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        warn!(missed, "workspace fell behind host events, resyncing");
                        workspace.sync_floating().await;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }

    /// Reconcile the floating set with the host's live windows.
    pub async fn sync_floating(&self) {
        let live = match self.bridge.list_floating_panes(&self.project).await {
            Ok(live) => live,
            Err(e) => {
                warn!(project = %self.project.display(), "could not list floating panes: {e}");
                return;
            }
        };

        let mut state = self.state();
        let live_ids: BTreeSet<LayoutPaneId> = live
            .iter()
            .map(|d| d.id)
            .filter(|id| self.catalogue.contains(id))
            .collect();
        let mut changed = false;

        let gone: Vec<LayoutPaneId> = state
            .floating
            .difference(&live_ids)
            .filter(|p| !state.pending.contains(p))
            .copied()
            .collect();
        for pane in gone {
            state.floating.remove(&pane);
            state.dock(pane);
            changed = true;
        }
        for &pane in &live_ids {
            if state.pending.contains(&pane) || state.floating.contains(&pane) {
                continue;
            }
            state.undock(pane);
            state.floating.insert(pane);
            changed = true;
        }
        for descriptor in &live {
            if live_ids.contains(&descriptor.id)
                && state.remembered.get(&descriptor.id) != Some(&descriptor.bounds)
            {
                state.remembered.insert(descriptor.id, descriptor.bounds);
                changed = true;
            }
        }

        if changed {
            debug!(floating = state.floating.len(), "floating set resynced");
            self.persist(&state);
        }
    }

    /// Check a cached floating `pane` against the host's live windows.
    ///
    /// Returns `true` when the window was gone and the pane has been put
    /// back in the dock. Panes with a request in flight are left alone.
    pub(super) async fn revalidate_floating(&self, pane: LayoutPaneId) -> bool {
        {
            let state = self.state();
            if !state.floating.contains(&pane) || state.pending.contains(&pane) {
                return false;
            }
        }
        self.sync_floating().await;
        let state = self.state();
        !state.floating.contains(&pane) && state.is_docked(pane)
    }

    /// Remembered bounds for `pane`, fitted to the current work area.
    fn request_bounds(&self, state: &WorkspaceState, pane: LayoutPaneId) -> Option<Rect> {
        let remembered = state.remembered.get(&pane).copied()?;
        Some(match state.work_area {
            Some(area) => remembered.clamp_within(
                &area,
                self.settings.min_floating_width,
                self.settings.min_floating_height,
            ),
            None => remembered,
        })
    }
}
