use quire_common::{PlatformError, Rect};
use serde::{Deserialize, Serialize};

pub mod headless;

pub type Result<T> = std::result::Result<T, PlatformError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to create a floating pane window.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingWindowSpec {
    pub title: String,
    /// Content to load; identifies the pane and its project.
    pub target_url: String,
    pub bounds: Rect,
    pub min_width: f64,
    pub min_height: f64,
    /// Windows are created hidden and shown once their content is ready.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    /// The window's content finished loading.
    ContentReady(WindowId),
    /// The window is gone, whoever closed it.
    Closed(WindowId),
    /// New outer frame after a move or resize.
    Moved(WindowId, Rect),
}

pub struct WatchHandle {
    _inner: Box<dyn std::any::Any + Send + Sync>,
}

impl WatchHandle {
    pub fn new(inner: impl std::any::Any + Send + Sync + 'static) -> Self {
        Self {
            _inner: Box::new(inner),
        }
    }
}

pub type WindowCallback = Box<dyn Fn(WindowEvent) + Send + Sync>;

/// Native window operations the floating pane registry relies on.
///
/// Callbacks registered through `watch_windows` may run on any thread and
/// must not be invoked while the backend holds its own locks.
pub trait WindowBackend: Send + Sync {
    fn create_window(&self, spec: &FloatingWindowSpec) -> Result<WindowId>;
    fn show_window(&self, window_id: WindowId) -> Result<()>;
    fn focus_window(&self, window_id: WindowId) -> Result<()>;
    fn close_window(&self, window_id: WindowId) -> Result<()>;
    /// `true` for closed windows and ids the backend never issued.
    fn is_destroyed(&self, window_id: WindowId) -> bool;
    /// Current outer frame, read from the window itself.
    fn window_frame(&self, window_id: WindowId) -> Result<Rect>;
    /// Visible work area of the screen new windows open on, if known.
    fn work_area(&self) -> Option<Rect>;
    fn watch_windows(&self, callback: WindowCallback) -> Result<WatchHandle>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn window_id_hash_and_display() {
        let mut set = HashSet::new();
        set.insert(WindowId(1));
        set.insert(WindowId(2));
        set.insert(WindowId(1));
        assert_eq!(set.len(), 2);
        assert_eq!(WindowId(42).to_string(), "42");
    }

    #[test]
    fn window_id_serialization() {
        let json = serde_json::to_string(&WindowId(42)).unwrap();
        assert_eq!(json, "42");
        let back: WindowId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WindowId(42));
    }
}
