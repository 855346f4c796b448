//! Core types and constructors for DockWorkspace.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use quire_bridge::LayoutBridge;
use quire_common::{FloatingPaneDescriptor, LayoutPaneId, PersistedLayoutPayload, Rect};
use quire_layout::{normalize, SplitNode};

use crate::keymap::KeyBindings;
use crate::persist::DebouncedSaver;
use crate::settings::WorkspaceSettings;

/// Where a pane currently lives. Every catalogue pane is in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneState {
    Docked,
    Hidden,
    Floating,
}

/// A docked pane's rectangle for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneFrame {
    pub pane: LayoutPaneId,
    pub rect: Rect,
    pub focused: bool,
}

#[derive(Debug, Default)]
pub(super) struct WorkspaceState {
    /// `None` when every pane is hidden or floating.
    pub tree: Option<SplitNode>,
    pub focused: Option<LayoutPaneId>,
    /// Panes with a floating window, or one being opened.
    pub floating: BTreeSet<LayoutPaneId>,
    /// Panes with a float or dock request in flight.
    pub pending: BTreeSet<LayoutPaneId>,
    /// Last geometry each pane's window reported.
    pub remembered: BTreeMap<LayoutPaneId, Rect>,
    pub work_area: Option<Rect>,
}

impl WorkspaceState {
    pub fn is_docked(&self, pane: LayoutPaneId) -> bool {
        self.tree.as_ref().is_some_and(|t| t.contains_pane(pane))
    }

    pub fn floating_list(&self) -> Vec<LayoutPaneId> {
        self.floating.iter().copied().collect()
    }

    /// Remove `pane` from the tree. Focus moves to the pane after it.
    pub fn undock(&mut self, pane: LayoutPaneId) -> bool {
        let Some(tree) = self.tree.take() else {
            return false;
        };
        if !tree.contains_pane(pane) {
            self.tree = Some(tree);
            return false;
        }
        let successor = tree.next_pane(pane);
        self.tree = tree.without_pane(pane);
        if self.focused == Some(pane) {
            self.focused = successor.or_else(|| self.tree.as_ref().map(SplitNode::first_pane));
        }
        true
    }

    pub fn dock(&mut self, pane: LayoutPaneId) {
        self.tree = Some(quire_layout::ensure_pane_in_layout(self.tree.take(), pane));
        if self.focused.is_none() {
            self.focused = Some(pane);
        }
    }

    /// Replace the tree, keeping focus when the focused pane survives.
    pub fn replace_tree(&mut self, tree: Option<SplitNode>) {
        self.tree = tree;
        let keep = self.focused.is_some_and(|f| self.is_docked(f));
        if !keep {
            self.focused = self.tree.as_ref().map(SplitNode::first_pane);
        }
    }

    pub fn payload(&self) -> PersistedLayoutPayload {
        let layout = self
            .tree
            .as_ref()
            .and_then(|t| serde_json::to_value(t).ok())
            .unwrap_or(serde_json::Value::Null);
        let floating = self
            .remembered
            .iter()
            .map(|(id, bounds)| FloatingPaneDescriptor {
                id: *id,
                bounds: *bounds,
            })
            .collect();
        PersistedLayoutPayload::new(layout, floating)
    }
}

/// Docked/hidden/floating state of one project's panes.
pub struct DockWorkspace {
    pub(super) project: PathBuf,
    pub(super) catalogue: Vec<LayoutPaneId>,
    pub(super) settings: WorkspaceSettings,
    pub(super) bindings: KeyBindings,
    pub(super) bridge: Arc<dyn LayoutBridge>,
    pub(super) saver: DebouncedSaver,
    pub(super) state: Mutex<WorkspaceState>,
}

impl DockWorkspace {
    /// A workspace showing the default preset, nothing loaded yet.
    /// Must be called within a tokio runtime.
    pub fn new(
        project: impl Into<PathBuf>,
        bridge: Arc<dyn LayoutBridge>,
        settings: WorkspaceSettings,
    ) -> Self {
        Self::with_catalogue(project, bridge, settings, LayoutPaneId::ALL.to_vec())
    }

    /// Like [`new`](Self::new) with a restricted pane catalogue.
    pub fn with_catalogue(
        project: impl Into<PathBuf>,
        bridge: Arc<dyn LayoutBridge>,
        settings: WorkspaceSettings,
        catalogue: Vec<LayoutPaneId>,
    ) -> Self {
        let project = project.into();
        let saver = DebouncedSaver::spawn(project.clone(), Arc::clone(&bridge), settings.debounce);
        let bindings = KeyBindings::from_config(&settings.keybinds);

        let mut state = WorkspaceState::default();
        state.replace_tree(normalize(settings.default_preset.tree(), &catalogue, &[]));

        Self {
            project,
            catalogue,
            settings,
            bindings,
            bridge,
            saver,
            state: Mutex::new(state),
        }
    }

    /// Create and [`load`](Self::load) in one step.
    pub async fn open(
        project: impl Into<PathBuf>,
        bridge: Arc<dyn LayoutBridge>,
        settings: WorkspaceSettings,
    ) -> Self {
        let workspace = Self::new(project, bridge, settings);
        workspace.load().await;
        workspace
    }

    pub(super) fn state(&self) -> MutexGuard<'_, WorkspaceState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a save of the current state.
    pub(super) fn persist(&self, state: &WorkspaceState) {
        self.saver.schedule(state.payload());
    }

    pub fn project(&self) -> &Path {
        &self.project
    }

    pub fn catalogue(&self) -> &[LayoutPaneId] {
        &self.catalogue
    }

    pub fn tree(&self) -> Option<SplitNode> {
        self.state().tree.clone()
    }

    pub fn focused(&self) -> Option<LayoutPaneId> {
        self.state().focused
    }

    /// Docked panes in tree order.
    pub fn visible_panes(&self) -> Vec<LayoutPaneId> {
        self.state()
            .tree
            .as_ref()
            .map(SplitNode::collect_pane_ids)
            .unwrap_or_default()
    }

    /// Panes neither docked nor floating, in catalogue order. These make
    /// up the hidden-pane dropdown.
    pub fn hidden_panes(&self) -> Vec<LayoutPaneId> {
        let state = self.state();
        self.catalogue
            .iter()
            .copied()
            .filter(|p| !state.is_docked(*p) && !state.floating.contains(p))
            .collect()
    }

    pub fn floating_panes(&self) -> Vec<LayoutPaneId> {
        self.state().floating_list()
    }

    /// `None` for panes outside the catalogue.
    pub fn pane_state(&self, pane: LayoutPaneId) -> Option<PaneState> {
        if !self.catalogue.contains(&pane) {
            return None;
        }
        let state = self.state();
        Some(if state.floating.contains(&pane) {
            PaneState::Floating
        } else if state.is_docked(pane) {
            PaneState::Docked
        } else {
            PaneState::Hidden
        })
    }

    pub fn remembered_bounds(&self, pane: LayoutPaneId) -> Option<Rect> {
        self.state().remembered.get(&pane).copied()
    }

    /// Visible work area of the screen floating windows open on.
    pub fn set_work_area(&self, area: Option<Rect>) {
        self.state().work_area = area.filter(Rect::is_usable);
    }

    /// What would be persisted right now.
    pub fn snapshot(&self) -> PersistedLayoutPayload {
        self.state().payload()
    }

    /// Write pending changes now. Call before closing the project.
    pub async fn teardown(&self) {
        self.saver.flush().await;
    }
}
