//! Typed bridge messages.
//!
//! Requests and responses serialize adjacently tagged, as
//! `{"kind": "...", "payload": ...}`, with camelCase kinds and fields.

use std::path::PathBuf;

use quire_common::{
    BridgeError, FloatingPaneDescriptor, LayoutPaneId, PersistedLayoutPayload, Rect,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub project_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLayoutRequest {
    pub project_path: PathBuf,
    pub payload: PersistedLayoutPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenFloatingPaneRequest {
    pub project_path: PathBuf,
    pub pane_id: LayoutPaneId,
    /// Requested geometry. `None` means the host default size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenFloatingPaneResult {
    /// `false` when an existing window was focused instead.
    pub opened: bool,
    /// Bounds actually used when the host had to move the window on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamped: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseFloatingPaneRequest {
    pub project_path: PathBuf,
    pub pane_id: LayoutPaneId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum BridgeRequest {
    LoadLayout(ProjectRequest),
    SaveLayout(SaveLayoutRequest),
    ResetLayout(ProjectRequest),
    ListFloatingPanes(ProjectRequest),
    OpenFloatingPane(OpenFloatingPaneRequest),
    CloseFloatingPane(CloseFloatingPaneRequest),
}

impl BridgeRequest {
    /// Wire kinds, in declaration order.
    pub const KINDS: [&'static str; 6] = [
        "loadLayout",
        "saveLayout",
        "resetLayout",
        "listFloatingPanes",
        "openFloatingPane",
        "closeFloatingPane",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            BridgeRequest::LoadLayout(_) => "loadLayout",
            BridgeRequest::SaveLayout(_) => "saveLayout",
            BridgeRequest::ResetLayout(_) => "resetLayout",
            BridgeRequest::ListFloatingPanes(_) => "listFloatingPanes",
            BridgeRequest::OpenFloatingPane(_) => "openFloatingPane",
            BridgeRequest::CloseFloatingPane(_) => "closeFloatingPane",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum BridgeResponse {
    Layout(Option<PersistedLayoutPayload>),
    Saved,
    Reset,
    FloatingPanes(Vec<FloatingPaneDescriptor>),
    Opened(OpenFloatingPaneResult),
    Closed,
    Error(BridgeFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Unavailable,
    Remote,
    Protocol,
}

/// A [`BridgeError`] in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&BridgeError> for BridgeFailure {
    fn from(err: &BridgeError) -> Self {
        let (kind, message) = match err {
            BridgeError::Unavailable(m) => (FailureKind::Unavailable, m),
            BridgeError::Remote(m) => (FailureKind::Remote, m),
            BridgeError::Protocol(m) => (FailureKind::Protocol, m),
        };
        Self {
            kind,
            message: message.clone(),
        }
    }
}

impl From<BridgeFailure> for BridgeError {
    fn from(failure: BridgeFailure) -> Self {
        match failure.kind {
            FailureKind::Unavailable => BridgeError::Unavailable(failure.message),
            FailureKind::Remote => BridgeError::Remote(failure.message),
            FailureKind::Protocol => BridgeError::Protocol(failure.message),
        }
    }
}

impl BridgeResponse {
    pub fn error(err: &BridgeError) -> Self {
        BridgeResponse::Error(err.into())
    }

    fn unexpected(self, wanted: &str) -> BridgeError {
        match self {
            BridgeResponse::Error(failure) => failure.into(),
            other => BridgeError::Protocol(format!("expected {wanted} response, got {other:?}")),
        }
    }

    pub fn into_layout(self) -> Result<Option<PersistedLayoutPayload>, BridgeError> {
        match self {
            BridgeResponse::Layout(payload) => Ok(payload),
            other => Err(other.unexpected("layout")),
        }
    }

    pub fn into_saved(self) -> Result<(), BridgeError> {
        match self {
            BridgeResponse::Saved => Ok(()),
            other => Err(other.unexpected("saved")),
        }
    }

    pub fn into_reset(self) -> Result<(), BridgeError> {
        match self {
            BridgeResponse::Reset => Ok(()),
            other => Err(other.unexpected("reset")),
        }
    }

    pub fn into_floating_panes(self) -> Result<Vec<FloatingPaneDescriptor>, BridgeError> {
        match self {
            BridgeResponse::FloatingPanes(panes) => Ok(panes),
            other => Err(other.unexpected("floatingPanes")),
        }
    }

    pub fn into_opened(self) -> Result<OpenFloatingPaneResult, BridgeError> {
        match self {
            BridgeResponse::Opened(result) => Ok(result),
            other => Err(other.unexpected("opened")),
        }
    }

    pub fn into_closed(self) -> Result<(), BridgeError> {
        match self {
            BridgeResponse::Closed => Ok(()),
            other => Err(other.unexpected("closed")),
        }
    }
}
