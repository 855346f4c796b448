//! In-process transport: a [`LayoutBridge`] client that forwards each call
//! over an mpsc channel, and the matching server loop.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use quire_common::{
    new_correlation_id, BridgeError, FloatingPaneDescriptor, PersistedLayoutPayload,
};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::contract::LayoutBridge;
use crate::messages::{
    BridgeRequest, BridgeResponse, CloseFloatingPaneRequest, OpenFloatingPaneRequest,
    OpenFloatingPaneResult, ProjectRequest, SaveLayoutRequest,
};

/// One request in flight, with the slot its response goes to.
pub struct BridgeCall {
    pub id: String,
    pub request: BridgeRequest,
    pub reply: oneshot::Sender<BridgeResponse>,
}

/// Client half of the channel transport.
#[derive(Clone)]
pub struct ChannelBridge {
    tx: mpsc::Sender<BridgeCall>,
}

impl ChannelBridge {
    /// Create a client and the receiver to hand to [`serve`].
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<BridgeCall>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    /// Connect a client directly to `handler` on a background task.
    pub fn spawn(handler: Arc<dyn LayoutBridge>, buffer: usize) -> Self {
        let (client, rx) = Self::new(buffer);
        tokio::spawn(serve(rx, handler));
        client
    }

    async fn call(&self, request: BridgeRequest) -> Result<BridgeResponse, BridgeError> {
        let id = new_correlation_id();
        let kind = request.kind();
        let (reply, response) = oneshot::channel();

        debug!(id = %id, kind, "bridge request");
        self.tx
            .send(BridgeCall {
                id: id.clone(),
                request,
                reply,
            })
            .await
            .map_err(|_| BridgeError::Unavailable("host channel closed".into()))?;

        response.await.map_err(|_| {
            warn!(id = %id, kind, "bridge call dropped without a response");
            BridgeError::Unavailable(format!("no response to {kind}"))
        })
    }
}

fn project(project: &Path) -> ProjectRequest {
    ProjectRequest {
        project_path: project.to_path_buf(),
    }
}

#[async_trait]
impl LayoutBridge for ChannelBridge {
    async fn load_layout(
        &self,
        path: &Path,
    ) -> Result<Option<PersistedLayoutPayload>, BridgeError> {
        self.call(BridgeRequest::LoadLayout(project(path)))
            .await?
            .into_layout()
    }

    async fn save_layout(
        &self,
        path: &Path,
        payload: PersistedLayoutPayload,
    ) -> Result<(), BridgeError> {
        self.call(BridgeRequest::SaveLayout(SaveLayoutRequest {
            project_path: path.to_path_buf(),
            payload,
        }))
        .await?
        .into_saved()
    }

    async fn reset_layout(&self, path: &Path) -> Result<(), BridgeError> {
        self.call(BridgeRequest::ResetLayout(project(path)))
            .await?
            .into_reset()
    }

    async fn list_floating_panes(
        &self,
        path: &Path,
    ) -> Result<Vec<FloatingPaneDescriptor>, BridgeError> {
        self.call(BridgeRequest::ListFloatingPanes(project(path)))
            .await?
            .into_floating_panes()
    }

    async fn open_floating_pane(
        &self,
        request: OpenFloatingPaneRequest,
    ) -> Result<OpenFloatingPaneResult, BridgeError> {
        self.call(BridgeRequest::OpenFloatingPane(request))
            .await?
            .into_opened()
    }

    async fn close_floating_pane(
        &self,
        request: CloseFloatingPaneRequest,
    ) -> Result<(), BridgeError> {
        self.call(BridgeRequest::CloseFloatingPane(request))
            .await?
            .into_closed()
    }
}

/// Run one request against `handler`, folding errors into the response.
pub async fn dispatch(handler: &dyn LayoutBridge, request: BridgeRequest) -> BridgeResponse {
    let result = match request {
        BridgeRequest::LoadLayout(req) => handler
            .load_layout(&req.project_path)
            .await
            .map(BridgeResponse::Layout),
        BridgeRequest::SaveLayout(req) => handler
            .save_layout(&req.project_path, req.payload)
            .await
            .map(|()| BridgeResponse::Saved),
        BridgeRequest::ResetLayout(req) => handler
            .reset_layout(&req.project_path)
            .await
            .map(|()| BridgeResponse::Reset),
        BridgeRequest::ListFloatingPanes(req) => handler
            .list_floating_panes(&req.project_path)
            .await
            .map(BridgeResponse::FloatingPanes),
        BridgeRequest::OpenFloatingPane(req) => handler
            .open_floating_pane(req)
            .await
            .map(BridgeResponse::Opened),
        BridgeRequest::CloseFloatingPane(req) => handler
            .close_floating_pane(req)
            .await
            .map(|()| BridgeResponse::Closed),
    };
    result.unwrap_or_else(|e| BridgeResponse::error(&e))
}

/// Answer calls from `rx` until every client is dropped.
///
/// Each call runs on its own task so a slow save does not hold up window
/// operations; ordering between calls is the handler's concern.
pub async fn serve(mut rx: mpsc::Receiver<BridgeCall>, handler: Arc<dyn LayoutBridge>) {
    while let Some(call) = rx.recv().await {
        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let kind = call.request.kind();
            let response = dispatch(handler.as_ref(), call.request).await;
            if let BridgeResponse::Error(ref failure) = response {
                warn!(id = %call.id, kind, "bridge request failed: {}", failure.message);
            }
            if call.reply.send(response).is_err() {
                debug!(id = %call.id, kind, "caller went away before the response");
            }
        });
    }
    debug!("bridge server stopped: all clients dropped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_common::{LayoutPaneId, Rect};
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Answers from memory and records the kinds it saw.
    #[derive(Default)]
    struct FakeHost {
        saved: Mutex<Option<PersistedLayoutPayload>>,
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl LayoutBridge for FakeHost {
        async fn load_layout(
            &self,
            _project: &Path,
        ) -> Result<Option<PersistedLayoutPayload>, BridgeError> {
            self.calls.lock().unwrap().push("load");
            Ok(self.saved.lock().unwrap().clone())
        }

        async fn save_layout(
            &self,
            _project: &Path,
            payload: PersistedLayoutPayload,
        ) -> Result<(), BridgeError> {
            self.calls.lock().unwrap().push("save");
            *self.saved.lock().unwrap() = Some(payload);
            Ok(())
        }

        async fn reset_layout(&self, _project: &Path) -> Result<(), BridgeError> {
            Err(BridgeError::Remote("read-only volume".into()))
        }

        async fn list_floating_panes(
            &self,
            _project: &Path,
        ) -> Result<Vec<FloatingPaneDescriptor>, BridgeError> {
            Ok(vec![FloatingPaneDescriptor {
                id: LayoutPaneId::Timeline,
                bounds: Rect::new(0.0, 0.0, 640.0, 420.0),
            }])
        }

        async fn open_floating_pane(
            &self,
            request: OpenFloatingPaneRequest,
        ) -> Result<OpenFloatingPaneResult, BridgeError> {
            Ok(OpenFloatingPaneResult {
                opened: request.pane_id != LayoutPaneId::Outline,
                clamped: None,
            })
        }

        async fn close_floating_pane(
            &self,
            _request: CloseFloatingPaneRequest,
        ) -> Result<(), BridgeError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn round_trip_through_channel() {
        let host = Arc::new(FakeHost::default());
        let client = ChannelBridge::spawn(host.clone(), 8);
        let project = PathBuf::from("/work/novel");

        assert!(client.load_layout(&project).await.unwrap().is_none());
        client
            .save_layout(&project, PersistedLayoutPayload::default())
            .await
            .unwrap();
        assert!(client.load_layout(&project).await.unwrap().is_some());
        assert_eq!(*host.calls.lock().unwrap(), vec!["load", "save", "load"]);

        let panes = client.list_floating_panes(&project).await.unwrap();
        assert_eq!(panes[0].id, LayoutPaneId::Timeline);

        let result = client
            .open_floating_pane(OpenFloatingPaneRequest {
                project_path: project.clone(),
                pane_id: LayoutPaneId::Outline,
                bounds: None,
            })
            .await
            .unwrap();
        assert!(!result.opened);
    }

    #[tokio::test]
    async fn host_errors_come_back_typed() {
        let client = ChannelBridge::spawn(Arc::new(FakeHost::default()), 8);
        let err = client
            .reset_layout(Path::new("/work/novel"))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::Remote(ref m) if m == "read-only volume"));
    }

    #[tokio::test]
    async fn closed_channel_is_unavailable() {
        let (client, rx) = ChannelBridge::new(1);
        drop(rx);
        let err = client
            .load_layout(Path::new("/work/novel"))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::Unavailable(_)));
    }

    #[tokio::test]
    async fn dropped_reply_is_unavailable() {
        let (client, mut rx) = ChannelBridge::new(1);
        tokio::spawn(async move {
            while let Some(call) = rx.recv().await {
                drop(call);
            }
        });
        let err = client
            .list_floating_panes(Path::new("/work/novel"))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::Unavailable(_)));
    }
}
