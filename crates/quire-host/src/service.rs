//! Host side of the bridge: layout files through the store, floating
//! windows through the registry.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use quire_bridge::{
    CloseFloatingPaneRequest, LayoutBridge, OpenFloatingPaneRequest, OpenFloatingPaneResult,
};
use quire_common::{BridgeError, FloatingPaneDescriptor, PersistedLayoutPayload};
use tracing::debug;

use crate::registry::FloatingPaneRegistry;

pub struct HostService {
    registry: Arc<FloatingPaneRegistry>,
}

impl HostService {
    pub fn new(registry: Arc<FloatingPaneRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<FloatingPaneRegistry> {
        &self.registry
    }

    /// Store calls touch the filesystem; keep them off the async workers.
    async fn blocking<T, F>(project: &Path, op: F) -> Result<T, BridgeError>
    where
        T: Send + 'static,
        F: FnOnce(PathBuf) -> T + Send + 'static,
    {
        let project = project.to_path_buf();
        tokio::task::spawn_blocking(move || op(project))
            .await
            .map_err(|e| BridgeError::Remote(format!("store task failed: {e}")))
    }
}

#[async_trait]
impl LayoutBridge for HostService {
    async fn load_layout(
        &self,
        project: &Path,
    ) -> Result<Option<PersistedLayoutPayload>, BridgeError> {
        Self::blocking(project, |p| quire_store::load(&p)).await
    }

    async fn save_layout(
        &self,
        project: &Path,
        payload: PersistedLayoutPayload,
    ) -> Result<(), BridgeError> {
        Self::blocking(project, move |p| quire_store::save(&p, &payload)).await??;
        Ok(())
    }

    async fn reset_layout(&self, project: &Path) -> Result<(), BridgeError> {
        Self::blocking(project, |p| quire_store::reset(&p)).await??;
        Ok(())
    }

    async fn list_floating_panes(
        &self,
        project: &Path,
    ) -> Result<Vec<FloatingPaneDescriptor>, BridgeError> {
        Ok(self.registry.list(project))
    }

    async fn open_floating_pane(
        &self,
        request: OpenFloatingPaneRequest,
    ) -> Result<OpenFloatingPaneResult, BridgeError> {
        let result = self
            .registry
            .open(&request.project_path, request.pane_id, request.bounds)
            .await?;
        Ok(result)
    }

    async fn close_floating_pane(
        &self,
        request: CloseFloatingPaneRequest,
    ) -> Result<(), BridgeError> {
        let closed = self
            .registry
            .close(&request.project_path, request.pane_id)
            .await?;
        debug!(pane = %request.pane_id, closed, "close floating pane handled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::HeadlessBackend;
    use crate::registry::FloatingGeometry;
    use quire_common::LayoutPaneId;
    use serde_json::json;

    fn service() -> (Arc<HeadlessBackend>, HostService) {
        let backend = Arc::new(HeadlessBackend::new());
        let registry = FloatingPaneRegistry::new(backend.clone(), FloatingGeometry::default());
        (backend, HostService::new(Arc::new(registry)))
    }

    #[tokio::test]
    async fn layout_save_load_reset() {
        let dir = tempfile::tempdir().unwrap();
        let (_backend, host) = service();

        assert!(host.load_layout(dir.path()).await.unwrap().is_none());

        let payload = PersistedLayoutPayload::new(json!("outline"), vec![]);
        host.save_layout(dir.path(), payload.clone()).await.unwrap();
        assert_eq!(host.load_layout(dir.path()).await.unwrap(), Some(payload));

        host.reset_layout(dir.path()).await.unwrap();
        assert!(host.load_layout(dir.path()).await.unwrap().is_none());
        host.reset_layout(dir.path()).await.unwrap();
    }

    #[tokio::test]
    async fn store_failure_is_remote_error() {
        let (_backend, host) = service();
        let err = host
            .save_layout(Path::new(""), PersistedLayoutPayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::Remote(_)));
    }

    #[tokio::test]
    async fn floating_operations_go_through_registry() {
        let (backend, host) = service();
        let project = PathBuf::from("/work/novel");
        let open = OpenFloatingPaneRequest {
            project_path: project.clone(),
            pane_id: LayoutPaneId::RelationshipGraph,
            bounds: None,
        };

        assert!(host.open_floating_pane(open.clone()).await.unwrap().opened);
        assert!(!host.open_floating_pane(open).await.unwrap().opened);
        assert_eq!(backend.created_count(), 1);

        let listed = host.list_floating_panes(&project).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, LayoutPaneId::RelationshipGraph);

        let close = CloseFloatingPaneRequest {
            project_path: project.clone(),
            pane_id: LayoutPaneId::RelationshipGraph,
        };
        host.close_floating_pane(close.clone()).await.unwrap();
        host.close_floating_pane(close).await.unwrap();
        assert!(host.list_floating_panes(&project).await.unwrap().is_empty());
    }
}
