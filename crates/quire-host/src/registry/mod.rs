//! Floating pane registry.
//!
//! Maps `project -> pane -> window` for the lifetime of the host process.
//! Entries are created by a successful `open` and removed either by
//! `close` or by the window's own close event, which is the only signal
//! that covers a user closing the window directly.

mod geometry;


pub use geometry::FloatingGeometry;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use quire_bridge::{BridgeEvent, EventBus, OpenFloatingPaneResult};
use quire_common::{FloatingPaneDescriptor, LayoutPaneId, PlatformError};
use tokio::sync::{broadcast, Mutex as AsyncMutex};
use tracing::{debug, info, warn};

use crate::platform::{FloatingWindowSpec, WatchHandle, WindowBackend, WindowEvent, WindowId};
use crate::target::floating_target_url;

type ProjectWindows = HashMap<PathBuf, HashMap<LayoutPaneId, WindowId>>;

struct RegistryInner {
    backend: Arc<dyn WindowBackend>,
    windows: Mutex<ProjectWindows>,
    /// Serializes open/close per (project, pane).
    pane_locks: Mutex<HashMap<(PathBuf, LayoutPaneId), Arc<AsyncMutex<()>>>>,
    events: EventBus,
}

impl RegistryInner {
    fn windows(&self) -> MutexGuard<'_, ProjectWindows> {
        self.windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn pane_lock(&self, project: &Path, pane: LayoutPaneId) -> Arc<AsyncMutex<()>> {
        let mut locks = self
            .pane_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(
            locks
                .entry((project.to_path_buf(), pane))
                .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
        )
    }

    fn lookup(&self, project: &Path, pane: LayoutPaneId) -> Option<WindowId> {
        self.windows()
            .get(project)
            .and_then(|panes| panes.get(&pane))
            .copied()
    }

    fn insert(&self, project: &Path, pane: LayoutPaneId, window_id: WindowId) {
        self.windows()
            .entry(project.to_path_buf())
            .or_default()
            .insert(pane, window_id);
    }

    /// Remove the entry if it still points at `window_id`.
    fn forget(&self, project: &Path, pane: LayoutPaneId, window_id: WindowId) -> bool {
        let mut windows = self.windows();
        let Some(panes) = windows.get_mut(project) else {
            return false;
        };
        if panes.get(&pane) != Some(&window_id) {
            return false;
        }
        panes.remove(&pane);
        if panes.is_empty() {
            windows.remove(project);
        }
        true
    }

    fn take(&self, project: &Path, pane: LayoutPaneId) -> Option<WindowId> {
        let mut windows = self.windows();
        let panes = windows.get_mut(project)?;
        let window_id = panes.remove(&pane);
        if panes.is_empty() {
            windows.remove(project);
        }
        window_id
    }

    fn owner_of(&self, window_id: WindowId) -> Option<(PathBuf, LayoutPaneId)> {
        self.windows().iter().find_map(|(project, panes)| {
            panes
                .iter()
                .find(|(_, id)| **id == window_id)
                .map(|(pane, _)| (project.clone(), *pane))
        })
    }

    fn handle_event(&self, event: WindowEvent) {
        match event {
            WindowEvent::ContentReady(window_id) => {
                if let Err(e) = self.backend.show_window(window_id) {
                    warn!(window = %window_id, "failed to show floating window: {e}");
                }
            }
            WindowEvent::Closed(window_id) => {
                let Some((project, pane)) = self.owner_of(window_id) else {
                    return;
                };
                if self.forget(&project, pane, window_id) {
                    info!(project = %project.display(), pane = %pane, "floating window closed");
                    self.events.publish(BridgeEvent::FloatingPaneClosed {
                        project_path: project,
                        pane_id: pane,
                    });
                }
            }
            WindowEvent::Moved(window_id, bounds) => {
                if let Some((project, pane)) = self.owner_of(window_id) {
                    self.events.publish(BridgeEvent::FloatingPaneMoved {
                        project_path: project,
                        pane_id: pane,
                        bounds,
                    });
                }
            }
        }
    }
}

pub struct FloatingPaneRegistry {
    inner: Arc<RegistryInner>,
    geometry: FloatingGeometry,
    _watch: Option<WatchHandle>,
}

impl FloatingPaneRegistry {
    pub fn new(backend: Arc<dyn WindowBackend>, geometry: FloatingGeometry) -> Self {
        Self::with_events(backend, geometry, EventBus::default())
    }

    /// Like [`new`](Self::new), publishing window events on `events`.
    pub fn with_events(
        backend: Arc<dyn WindowBackend>,
        geometry: FloatingGeometry,
        events: EventBus,
    ) -> Self {
        let inner = Arc::new(RegistryInner {
            backend,
            windows: Mutex::new(HashMap::new()),
            pane_locks: Mutex::new(HashMap::new()),
            events,
        });

        let weak: Weak<RegistryInner> = Arc::downgrade(&inner);
        let watch = inner
            .backend
            .watch_windows(Box::new(move |event| {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_event(event);
                }
            }))
            .map_err(|e| {
                warn!("window events unavailable, relying on stale handle pruning: {e}");
            })
            .ok();

        Self {
            inner,
            geometry,
            _watch: watch,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BridgeEvent> {
        self.inner.events.subscribe()
    }

    pub fn events(&self) -> &EventBus {
        &self.inner.events
    }

    /// Window currently registered for a pane, live or not.
    pub fn window_id(&self, project: &Path, pane: LayoutPaneId) -> Option<WindowId> {
        self.inner.lookup(project, pane)
    }

    /// Open the floating window for `pane`, or focus it if one is live.
    pub async fn open(
        &self,
        project: &Path,
        pane: LayoutPaneId,
        requested: Option<quire_common::Rect>,
    ) -> Result<OpenFloatingPaneResult, PlatformError> {
        let lock = self.inner.pane_lock(project, pane);
        let _guard = lock.lock().await;
        let backend = &self.inner.backend;

        if let Some(window_id) = self.inner.lookup(project, pane) {
            if !backend.is_destroyed(window_id) {
                match backend.focus_window(window_id) {
                    Ok(()) => {
                        debug!(project = %project.display(), pane = %pane, "focused existing floating window");
                        return Ok(OpenFloatingPaneResult {
                            opened: false,
                            clamped: None,
                        });
                    }
                    Err(PlatformError::WindowGone(_)) => {}
                    Err(e) => return Err(e),
                }
            }
            warn!(project = %project.display(), pane = %pane, window = %window_id, "pruning stale floating window handle");
            self.inner.forget(project, pane, window_id);
        }

        let placement = self.geometry.place(requested, backend.work_area());
        let spec = FloatingWindowSpec {
            title: pane.title().to_string(),
            target_url: floating_target_url(project, pane),
            bounds: placement.bounds,
            min_width: self.geometry.min_width,
            min_height: self.geometry.min_height,
            visible: false,
        };
        let window_id = backend.create_window(&spec)?;
        self.inner.insert(project, pane, window_id);

        info!(
            project = %project.display(),
            pane = %pane,
            window = %window_id,
            clamped = placement.clamped.is_some(),
            "floating window opened"
        );
        Ok(OpenFloatingPaneResult {
            opened: true,
            clamped: placement.clamped,
        })
    }

    /// Close the floating window for `pane`. Returns whether a live window
    /// was closed; closing an unknown pane is not an error.
    pub async fn close(&self, project: &Path, pane: LayoutPaneId) -> Result<bool, PlatformError> {
        let lock = self.inner.pane_lock(project, pane);
        let _guard = lock.lock().await;

        let Some(window_id) = self.inner.take(project, pane) else {
            return Ok(false);
        };
        if self.inner.backend.is_destroyed(window_id) {
            return Ok(false);
        }
        match self.inner.backend.close_window(window_id) {
            Ok(()) => {
                debug!(project = %project.display(), pane = %pane, "floating window closed on request");
                Ok(true)
            }
            Err(PlatformError::WindowGone(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Live floating windows of `project` with their current frames.
    /// Destroyed handles are skipped and dropped from the registry.
    pub fn list(&self, project: &Path) -> Vec<FloatingPaneDescriptor> {
        let entries: Vec<(LayoutPaneId, WindowId)> = self
            .inner
            .windows()
            .get(project)
            .map(|panes| panes.iter().map(|(p, w)| (*p, *w)).collect())
            .unwrap_or_default();

        let backend = &self.inner.backend;
        let mut live = Vec::with_capacity(entries.len());
        for (pane, window_id) in entries {
            let frame = if backend.is_destroyed(window_id) {
                None
            } else {
                backend.window_frame(window_id).ok()
            };
            match frame {
                Some(bounds) => live.push(FloatingPaneDescriptor { id: pane, bounds }),
                None => {
                    warn!(project = %project.display(), pane = %pane, "pruning stale floating window handle");
                    self.inner.forget(project, pane, window_id);
                }
            }
        }
        live.sort_by_key(|d| d.id);
        live
    }

    /// Close every window belonging to `project`. Returns how many live
    /// windows were closed.
    pub async fn close_project(&self, project: &Path) -> usize {
        let panes: Vec<LayoutPaneId> = self
            .inner
            .windows()
            .get(project)
            .map(|panes| panes.keys().copied().collect())
            .unwrap_or_default();

        let mut closed = 0;
        for pane in panes {
            match self.close(project, pane).await {
                Ok(true) => closed += 1,
                Ok(false) => {}
                Err(e) => warn!(project = %project.display(), pane = %pane, "failed to close floating window: {e}"),
            }
        }
        if closed > 0 {
            info!(project = %project.display(), closed, "closed project floating windows");
        }
        closed
    }

    /// Close every floating window the host owns. Used on shutdown.
    pub async fn close_all(&self) -> usize {
        let projects: Vec<PathBuf> = self.inner.windows().keys().cloned().collect();
        let mut closed = 0;
        for project in projects {
            closed += self.close_project(&project).await;
        }
        closed
    }
}
