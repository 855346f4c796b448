//! Request/response contract between the workspace UI and the host process.
//!
//! The UI only ever talks to a [`LayoutBridge`]. The host implements it
//! over the layout store and the floating window registry; a
//! [`ChannelBridge`] carries calls across a task boundary and the
//! [`wire`] module across a process boundary as JSON lines.

mod channel;
mod contract;
mod events;
mod messages;
pub mod wire;

pub use channel::{dispatch, serve, BridgeCall, ChannelBridge};
pub use contract::LayoutBridge;
pub use events::{BridgeEvent, EventBus};
pub use messages::{
    BridgeFailure, BridgeRequest, BridgeResponse, CloseFloatingPaneRequest, FailureKind,
    OpenFloatingPaneRequest, OpenFloatingPaneResult, ProjectRequest, SaveLayoutRequest,
};
