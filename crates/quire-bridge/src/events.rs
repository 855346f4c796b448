//! Host-to-workspace notifications.

use std::path::PathBuf;

use quire_common::{LayoutPaneId, Rect};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum BridgeEvent {
    /// A floating window went away without a `closeFloatingPane` call.
    #[serde(rename_all = "camelCase")]
    FloatingPaneClosed {
        project_path: PathBuf,
        pane_id: LayoutPaneId,
    },
    /// A floating window was moved or resized.
    #[serde(rename_all = "camelCase")]
    FloatingPaneMoved {
        project_path: PathBuf,
        pane_id: LayoutPaneId,
        bounds: Rect,
    },
}

impl BridgeEvent {
    pub fn project_path(&self) -> &PathBuf {
        match self {
            BridgeEvent::FloatingPaneClosed { project_path, .. }
            | BridgeEvent::FloatingPaneMoved { project_path, .. } => project_path,
        }
    }
}

/// Fan-out of [`BridgeEvent`]s to any number of subscribers.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<BridgeEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BridgeEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers reached; zero is not an error.
    pub fn publish(&self, event: BridgeEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
