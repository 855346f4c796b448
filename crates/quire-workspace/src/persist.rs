//! Debounced layout persistence.
//!
//! Every structural change hands the saver a fresh snapshot. The saver
//! waits for a quiet period, trailing edge, then writes only the newest
//! snapshot. A save that has started always completes; changes arriving
//! meanwhile start a new quiet period.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use quire_bridge::LayoutBridge;
use quire_common::PersistedLayoutPayload;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

enum SaveMessage {
    Schedule(PersistedLayoutPayload),
    /// Drop the pending snapshot without saving it.
    Discard,
    /// Save the pending snapshot now, then reply.
    Flush(oneshot::Sender<()>),
}

/// Owns the save task for one project. Dropping it saves whatever is
/// pending and ends the task.
pub struct DebouncedSaver {
    tx: mpsc::UnboundedSender<SaveMessage>,
}

impl DebouncedSaver {
    pub fn spawn(project: PathBuf, bridge: Arc<dyn LayoutBridge>, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(project, bridge, debounce, rx));
        Self { tx }
    }

    /// Replace the pending snapshot and restart the quiet period.
    pub fn schedule(&self, payload: PersistedLayoutPayload) {
        if self.tx.send(SaveMessage::Schedule(payload)).is_err() {
            warn!("layout saver stopped, change not persisted");
        }
    }

    pub fn discard(&self) {
        let _ = self.tx.send(SaveMessage::Discard);
    }

    /// Write any pending snapshot immediately and wait for it.
    pub async fn flush(&self) {
        let (reply, done) = oneshot::channel();
        if self.tx.send(SaveMessage::Flush(reply)).is_ok() {
            let _ = done.await;
        }
    }
}

async fn run(
    project: PathBuf,
    bridge: Arc<dyn LayoutBridge>,
    debounce: Duration,
    mut rx: mpsc::UnboundedReceiver<SaveMessage>,
) {
    let mut pending: Option<PersistedLayoutPayload> = None;

    loop {
        let message = if pending.is_some() {
            tokio::select! {
                _ = tokio::time::sleep(debounce) => {
                    if let Some(payload) = pending.take() {
                        save(&project, bridge.as_ref(), payload).await;
                    }
                    continue;
                }
                message = rx.recv() => message,
            }
        } else {
            rx.recv().await
        };

        match message {
            Some(SaveMessage::Schedule(payload)) => pending = Some(payload),
            Some(SaveMessage::Discard) => pending = None,
            Some(SaveMessage::Flush(reply)) => {
                if let Some(payload) = pending.take() {
                    save(&project, bridge.as_ref(), payload).await;
                }
                let _ = reply.send(());
            }
            None => {
                if let Some(payload) = pending.take() {
                    save(&project, bridge.as_ref(), payload).await;
                }
                break;
            }
        }
    }
}

async fn save(project: &Path, bridge: &dyn LayoutBridge, payload: PersistedLayoutPayload) {
    match bridge.save_layout(project, payload).await {
        Ok(()) => debug!(project = %project.display(), "layout persisted"),
        Err(e) => warn!(project = %project.display(), "failed to persist layout: {e}"),
    }
}
