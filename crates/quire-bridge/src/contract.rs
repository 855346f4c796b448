use std::path::Path;

use async_trait::async_trait;
use quire_common::{BridgeError, FloatingPaneDescriptor, PersistedLayoutPayload};

use crate::messages::{CloseFloatingPaneRequest, OpenFloatingPaneRequest, OpenFloatingPaneResult};

/// The six operations the workspace needs from the host.
#[async_trait]
pub trait LayoutBridge: Send + Sync {
    /// `None` when the project has no usable persisted layout.
    async fn load_layout(
        &self,
        project: &Path,
    ) -> Result<Option<PersistedLayoutPayload>, BridgeError>;

    async fn save_layout(
        &self,
        project: &Path,
        payload: PersistedLayoutPayload,
    ) -> Result<(), BridgeError>;

    async fn reset_layout(&self, project: &Path) -> Result<(), BridgeError>;

    /// Live floating windows for `project` with their current geometry.
    async fn list_floating_panes(
        &self,
        project: &Path,
    ) -> Result<Vec<FloatingPaneDescriptor>, BridgeError>;

    /// Open (or focus) the floating window for a pane.
    async fn open_floating_pane(
        &self,
        request: OpenFloatingPaneRequest,
    ) -> Result<OpenFloatingPaneResult, BridgeError>;

    /// Close the floating window for a pane. Idempotent.
    async fn close_floating_pane(&self, request: CloseFloatingPaneRequest)
        -> Result<(), BridgeError>;
}
