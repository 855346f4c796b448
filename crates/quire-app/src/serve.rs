//! `quire serve`: the layout bridge over JSON lines.

use std::sync::Arc;

use quire_bridge::wire::{decode_request, encode_response, DecodedRequest, RejectedRequest};
use quire_bridge::{dispatch, BridgeEvent, BridgeResponse, EventBus, LayoutBridge};
use quire_config::WorkspaceConfig;
use quire_host::{FloatingGeometry, FloatingPaneRegistry, HeadlessBackend, HostService, WindowBackend};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Serve stdin/stdout until stdin closes, then close every window.
pub async fn run(config: &WorkspaceConfig) -> std::io::Result<()> {
    let backend: Arc<dyn WindowBackend> = Arc::new(HeadlessBackend::new());
    let events = EventBus::default();
    let registry = Arc::new(FloatingPaneRegistry::with_events(
        backend,
        FloatingGeometry::from(&config.floating),
        events.clone(),
    ));
    let service: Arc<dyn LayoutBridge> = Arc::new(HostService::new(Arc::clone(&registry)));

    info!("serving layout bridge on stdio");
    let stdin = BufReader::new(tokio::io::stdin());
    serve_lines(stdin, tokio::io::stdout(), service, events.subscribe()).await?;

    let closed = registry.close_all().await;
    info!(closed, "stdin closed, bridge stopped");
    Ok(())
}

/// Answer every request line from `input` on `output`, forwarding host
/// events in between. Requests run concurrently; responses carry the
/// request id and may arrive out of order.
pub async fn serve_lines<R, W>(
    input: R,
    output: W,
    service: Arc<dyn LayoutBridge>,
    events: broadcast::Receiver<BridgeEvent>,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<String>();
    let writer = tokio::spawn(write_lines(output, rx));

    let (stop, stopped) = oneshot::channel();
    let forwarder = tokio::spawn(forward_events(events, tx.clone(), stopped));

    let mut calls = JoinSet::new();
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match decode_request(line) {
            Ok(DecodedRequest { id, request }) => {
                debug!(id = %id, kind = request.kind(), "bridge request");
                let service = Arc::clone(&service);
                let tx = tx.clone();
                calls.spawn(async move {
                    let response = dispatch(service.as_ref(), request).await;
                    let _ = tx.send(encode_response(&id, &response));
                });
            }
            Err(RejectedRequest { id, error }) => {
                warn!(id = %id, "rejected bridge request: {error}");
                let _ = tx.send(encode_response(&id, &BridgeResponse::error(&error)));
            }
        }
    }

    while calls.join_next().await.is_some() {}
    let _ = stop.send(());
    if let Err(e) = forwarder.await {
        warn!("event forwarder failed: {e}");
    }
    drop(tx);

    writer.await.map_err(std::io::Error::other)?
}

/// Encode host events onto the output until `stop` fires, then flush
/// whatever is already queued on the bus.
async fn forward_events(
    mut events: broadcast::Receiver<BridgeEvent>,
    tx: mpsc::UnboundedSender<String>,
    mut stop: oneshot::Receiver<()>,
) {
    loop {
        let received = tokio::select! {
            biased;
            received = events.recv() => received,
            _ = &mut stop => break,
        };
        match received {
            Ok(event) => {
                if !send_event(&tx, &event) {
                    return;
                }
            }
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                warn!(missed, "dropped host events");
            }
            Err(broadcast::error::RecvError::Closed) => return,
        }
    }

    loop {
        match events.try_recv() {
            Ok(event) => {
                if !send_event(&tx, &event) {
                    return;
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(missed)) => {
                warn!(missed, "dropped host events");
            }
            Err(_) => return,
        }
    }
}

/// Returns `false` once the writer has gone away.
fn send_event(tx: &mpsc::UnboundedSender<String>, event: &BridgeEvent) -> bool {
    match serde_json::to_string(event) {
        Ok(line) => tx.send(line).is_ok(),
        Err(e) => {
            warn!("could not encode host event: {e}");
            true
        }
    }
}

async fn write_lines<W>(mut output: W, mut rx: mpsc::UnboundedReceiver<String>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = rx.recv().await {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    output.shutdown().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_bridge::wire::decode_response;
    use quire_common::LayoutPaneId;
    use serde_json::Value;
    use tokio::io::AsyncReadExt;

    struct Host {
        service: Arc<dyn LayoutBridge>,
        events: EventBus,
    }

    fn host() -> Host {
        let backend: Arc<dyn WindowBackend> = Arc::new(HeadlessBackend::new());
        let events = EventBus::default();
        let registry = Arc::new(FloatingPaneRegistry::with_events(
            backend,
            FloatingGeometry::default(),
            events.clone(),
        ));
        Host {
            service: Arc::new(HostService::new(registry)),
            events,
        }
    }

    async fn exchange(host: &Host, input: &str) -> Vec<String> {
        let (mut client, server) = tokio::io::duplex(64 * 1024);
        serve_lines(
            input.as_bytes(),
            server,
            Arc::clone(&host.service),
            host.events.subscribe(),
        )
        .await
        .unwrap();
        let mut text = String::new();
        client.read_to_string(&mut text).await.unwrap();
        text.lines().map(str::to_string).collect()
    }

    fn response_for(lines: &[String], id: &str) -> BridgeResponse {
        lines
            .iter()
            .filter_map(|l| decode_response(l).ok())
            .find(|(rid, _)| rid.as_deref() == Some(id))
            .map(|(_, response)| response)
            .unwrap_or_else(|| panic!("no response for {id} in {lines:?}"))
    }

    #[tokio::test]
    async fn save_then_load_round_trips_through_stdio() {
        let host = host();
        let dir = tempfile::tempdir().unwrap();
        let project = serde_json::to_string(dir.path()).unwrap();

        let save = format!(
            r#"{{"id":"s1","kind":"saveLayout","payload":{{"projectPath":{project},"payload":{{"layout":"outline","floatingPanes":[],"schemaVersion":1}}}}}}"#
        );
        let lines = exchange(&host, &save).await;
        assert_eq!(response_for(&lines, "s1"), BridgeResponse::Saved);

        let load = format!(r#"{{"id":"l1","kind":"loadLayout","payload":{{"projectPath":{project}}}}}"#);
        let lines = exchange(&host, &load).await;
        let payload = response_for(&lines, "l1").into_layout().unwrap().unwrap();
        assert_eq!(payload.layout, Value::String("outline".into()));
    }

    #[tokio::test]
    async fn bad_lines_get_error_responses() {
        let host = host();
        let input = concat!(
            r#"{"id":"x1","kind":"deleteEverything","payload":{}}"#,
            "\n\n",
            r#"{"id":"x2","kind":"openFloatingPane","payload":{"paneId":"timeline"}}"#,
            "\n",
        );
        let lines = exchange(&host, input).await;
        assert_eq!(lines.len(), 2);
        for id in ["x1", "x2"] {
            match response_for(&lines, id) {
                BridgeResponse::Error(failure) => {
                    assert_eq!(failure.kind, quire_bridge::FailureKind::Protocol)
                }
                other => panic!("expected error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn queued_events_are_flushed_on_shutdown() {
        let bus = EventBus::default();
        let events = bus.subscribe();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (stop, stopped) = oneshot::channel();

        for pane in [LayoutPaneId::Timeline, LayoutPaneId::Critique, LayoutPaneId::Outline] {
            bus.publish(BridgeEvent::FloatingPaneClosed {
                project_path: "/work/novel".into(),
                pane_id: pane,
            });
        }
        stop.send(()).unwrap();
        forward_events(events, tx, stopped).await;

        let mut lines = Vec::new();
        while let Ok(line) = rx.try_recv() {
            lines.push(line);
        }
        assert_eq!(lines.len(), 3);
        let last: Value = serde_json::from_str(&lines[2]).unwrap();
        assert_eq!(last["type"], "floatingPaneClosed");
        assert_eq!(last["data"]["paneId"], "outline");
    }

    #[tokio::test]
    async fn open_and_list_over_stdio() {
        let host = host();
        let dir = tempfile::tempdir().unwrap();
        let project = serde_json::to_string(dir.path()).unwrap();

        let open = format!(
            r#"{{"id":"o1","kind":"openFloatingPane","payload":{{"projectPath":{project},"paneId":"timeline"}}}}"#
        );
        let lines = exchange(&host, &open).await;
        assert!(response_for(&lines, "o1").into_opened().unwrap().opened);

        let list = format!(r#"{{"id":"f1","kind":"listFloatingPanes","payload":{{"projectPath":{project}}}}}"#);
        let lines = exchange(&host, &list).await;
        let panes = response_for(&lines, "f1").into_floating_panes().unwrap();
        assert_eq!(panes.len(), 1);
        assert_eq!(panes[0].id, LayoutPaneId::Timeline);
    }
}
