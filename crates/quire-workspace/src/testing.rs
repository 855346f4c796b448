//! In-memory bridge for controller tests.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use quire_bridge::{
    CloseFloatingPaneRequest, LayoutBridge, OpenFloatingPaneRequest, OpenFloatingPaneResult,
};
use quire_common::{
    BridgeError, FloatingPaneDescriptor, LayoutPaneId, PersistedLayoutPayload, Rect,
};
use serde_json::Value;

#[derive(Default)]
struct Recorded {
    unavailable: bool,
    persisted: Option<PersistedLayoutPayload>,
    saves: Vec<PersistedLayoutPayload>,
    opens: Vec<OpenFloatingPaneRequest>,
    closes: Vec<CloseFloatingPaneRequest>,
    resets: usize,
    live: BTreeMap<LayoutPaneId, Rect>,
}

/// Acts like a host with a store and a registry, and records every call.
#[derive(Default)]
pub(crate) struct RecordingBridge {
    inner: Mutex<Recorded>,
}

impl RecordingBridge {
    pub fn with_persisted(payload: PersistedLayoutPayload) -> Self {
        let bridge = Self::default();
        bridge.inner.lock().unwrap().persisted = Some(payload);
        bridge
    }

    pub fn set_available(&self, available: bool) {
        self.inner.lock().unwrap().unavailable = !available;
    }

    pub fn set_live(&self, pane: LayoutPaneId, bounds: Rect) {
        self.inner.lock().unwrap().live.insert(pane, bounds);
    }

    /// The host's window went away (user closed it).
    pub fn remove_live(&self, pane: LayoutPaneId) {
        self.inner.lock().unwrap().live.remove(&pane);
    }

    pub fn saved_layouts(&self) -> Vec<Value> {
        self.inner
            .lock()
            .unwrap()
            .saves
            .iter()
            .map(|p| p.layout.clone())
            .collect()
    }

    pub fn last_saved(&self) -> Option<PersistedLayoutPayload> {
        self.inner.lock().unwrap().saves.last().cloned()
    }

    pub fn opens(&self) -> Vec<OpenFloatingPaneRequest> {
        self.inner.lock().unwrap().opens.clone()
    }

    pub fn closes(&self) -> Vec<CloseFloatingPaneRequest> {
        self.inner.lock().unwrap().closes.clone()
    }

    pub fn resets(&self) -> usize {
        self.inner.lock().unwrap().resets
    }

    fn check(&self) -> Result<(), BridgeError> {
        if self.inner.lock().unwrap().unavailable {
            Err(BridgeError::Unavailable("host not running".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LayoutBridge for RecordingBridge {
    async fn load_layout(
        &self,
        _project: &Path,
    ) -> Result<Option<PersistedLayoutPayload>, BridgeError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().persisted.clone())
    }

    async fn save_layout(
        &self,
        _project: &Path,
        payload: PersistedLayoutPayload,
    ) -> Result<(), BridgeError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.persisted = Some(payload.clone());
        inner.saves.push(payload);
        Ok(())
    }

    async fn reset_layout(&self, _project: &Path) -> Result<(), BridgeError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.persisted = None;
        inner.resets += 1;
        Ok(())
    }

    async fn list_floating_panes(
        &self,
        _project: &Path,
    ) -> Result<Vec<FloatingPaneDescriptor>, BridgeError> {
        self.check()?;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .live
            .iter()
            .map(|(id, bounds)| FloatingPaneDescriptor {
                id: *id,
                bounds: *bounds,
            })
            .collect())
    }

    async fn open_floating_pane(
        &self,
        request: OpenFloatingPaneRequest,
    ) -> Result<OpenFloatingPaneResult, BridgeError> {
        tokio::task::yield_now().await;
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.opens.push(request.clone());
        if inner.live.contains_key(&request.pane_id) {
            return Ok(OpenFloatingPaneResult {
                opened: false,
                clamped: None,
            });
        }
        let bounds = request
            .bounds
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 640.0, 420.0));
        inner.live.insert(request.pane_id, bounds);
        Ok(OpenFloatingPaneResult {
            opened: true,
            clamped: None,
        })
    }

    async fn close_floating_pane(
        &self,
        request: CloseFloatingPaneRequest,
    ) -> Result<(), BridgeError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.live.remove(&request.pane_id);
        inner.closes.push(request);
        Ok(())
    }
}
