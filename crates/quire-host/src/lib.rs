//! Host-process side of the workspace: floating pane windows and the
//! [`LayoutBridge`](quire_bridge::LayoutBridge) implementation that serves
//! the workspace UI.

pub mod platform;
pub mod registry;
mod service;
pub mod target;

pub use platform::headless::HeadlessBackend;
pub use platform::{FloatingWindowSpec, WatchHandle, WindowBackend, WindowEvent, WindowId};
pub use registry::{FloatingGeometry, FloatingPaneRegistry};
pub use service::HostService;
pub use target::{floating_target_url, parse_floating_target};
