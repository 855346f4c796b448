//! In-memory window backend.
//!
//! Used by `quire serve` when no native backend is wired in, and by tests,
//! which drive it with the `simulate_*` methods to stand in for the user.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use quire_common::{PlatformError, Rect};

use super::{FloatingWindowSpec, Result, WatchHandle, WindowBackend, WindowEvent, WindowId};

type SharedCallback = Arc<dyn Fn(WindowEvent) + Send + Sync>;

#[derive(Debug, Clone)]
struct HeadlessWindow {
    spec: FloatingWindowSpec,
    frame: Rect,
    visible: bool,
    destroyed: bool,
}

#[derive(Default)]
struct HeadlessState {
    next_id: u64,
    windows: HashMap<WindowId, HeadlessWindow>,
    work_area: Option<Rect>,
    focus_count: usize,
}

#[derive(Default)]
pub struct HeadlessBackend {
    state: Mutex<HeadlessState>,
    callbacks: Mutex<Vec<SharedCallback>>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_work_area(area: Rect) -> Self {
        let backend = Self::default();
        backend.set_work_area(Some(area));
        backend
    }

    pub fn set_work_area(&self, area: Option<Rect>) {
        self.lock_state().work_area = area;
    }

    /// Total windows ever created, live or not.
    pub fn created_count(&self) -> usize {
        self.lock_state().windows.len()
    }

    pub fn live_count(&self) -> usize {
        self.lock_state()
            .windows
            .values()
            .filter(|w| !w.destroyed)
            .count()
    }

    pub fn focus_count(&self) -> usize {
        self.lock_state().focus_count
    }

    pub fn is_visible(&self, window_id: WindowId) -> bool {
        self.lock_state()
            .windows
            .get(&window_id)
            .is_some_and(|w| w.visible && !w.destroyed)
    }

    pub fn window_spec(&self, window_id: WindowId) -> Option<FloatingWindowSpec> {
        self.lock_state()
            .windows
            .get(&window_id)
            .map(|w| w.spec.clone())
    }

    /// The window's content reports it has loaded.
    pub fn simulate_content_ready(&self, window_id: WindowId) {
        self.emit(WindowEvent::ContentReady(window_id));
    }

    /// The user closes the window from its title bar.
    pub fn simulate_user_close(&self, window_id: WindowId) {
        if self.mark_destroyed(window_id) {
            self.emit(WindowEvent::Closed(window_id));
        }
    }

    /// The user drags or resizes the window.
    pub fn simulate_move(&self, window_id: WindowId, frame: Rect) {
        let moved = {
            let mut state = self.lock_state();
            match state.windows.get_mut(&window_id) {
                Some(window) if !window.destroyed => {
                    window.frame = frame;
                    true
                }
                _ => false,
            }
        };
        if moved {
            self.emit(WindowEvent::Moved(window_id, frame));
        }
    }

    /// The window disappears without any close event reaching watchers.
    pub fn destroy_silently(&self, window_id: WindowId) {
        self.mark_destroyed(window_id);
    }

    fn mark_destroyed(&self, window_id: WindowId) -> bool {
        let mut state = self.lock_state();
        match state.windows.get_mut(&window_id) {
            Some(window) if !window.destroyed => {
                window.destroyed = true;
                window.visible = false;
                true
            }
            _ => false,
        }
    }

    fn emit(&self, event: WindowEvent) {
        let callbacks: Vec<SharedCallback> = match self.callbacks.lock() {
            Ok(callbacks) => callbacks.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        for callback in callbacks {
            callback(event.clone());
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, HeadlessState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn with_live<T>(
        &self,
        window_id: WindowId,
        f: impl FnOnce(&mut HeadlessWindow) -> T,
    ) -> Result<T> {
        let mut state = self.lock_state();
        match state.windows.get_mut(&window_id) {
            Some(window) if !window.destroyed => Ok(f(window)),
            _ => Err(PlatformError::WindowGone(window_id.0)),
        }
    }
}

impl WindowBackend for HeadlessBackend {
    fn create_window(&self, spec: &FloatingWindowSpec) -> Result<WindowId> {
        if !spec.bounds.is_usable() {
            return Err(PlatformError::WindowCreate(format!(
                "unusable bounds {:?}",
                spec.bounds
            )));
        }
        let mut state = self.lock_state();
        state.next_id += 1;
        let id = WindowId(state.next_id);
        state.windows.insert(
            id,
            HeadlessWindow {
                spec: spec.clone(),
                frame: spec.bounds,
                visible: spec.visible,
                destroyed: false,
            },
        );
        Ok(id)
    }

    fn show_window(&self, window_id: WindowId) -> Result<()> {
        self.with_live(window_id, |w| w.visible = true)
    }

    fn focus_window(&self, window_id: WindowId) -> Result<()> {
        self.with_live(window_id, |_| ())?;
        self.lock_state().focus_count += 1;
        Ok(())
    }

    fn close_window(&self, window_id: WindowId) -> Result<()> {
        if !self.mark_destroyed(window_id) {
            return Err(PlatformError::WindowGone(window_id.0));
        }
        self.emit(WindowEvent::Closed(window_id));
        Ok(())
    }

    fn is_destroyed(&self, window_id: WindowId) -> bool {
        self.lock_state()
            .windows
            .get(&window_id)
            .map_or(true, |w| w.destroyed)
    }

    fn window_frame(&self, window_id: WindowId) -> Result<Rect> {
        self.with_live(window_id, |w| w.frame)
    }

    fn work_area(&self) -> Option<Rect> {
        self.lock_state().work_area
    }

    fn watch_windows(&self, callback: super::WindowCallback) -> Result<WatchHandle> {
        let mut callbacks = self
            .callbacks
            .lock()
            .map_err(|_| PlatformError::WindowManagerError("callback list poisoned".into()))?;
        callbacks.push(Arc::from(callback));
        Ok(WatchHandle::new(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn spec() -> FloatingWindowSpec {
        FloatingWindowSpec {
            title: "Timeline".into(),
            target_url: "quire://localhost/floating.html?pane=timeline".into(),
            bounds: Rect::new(10.0, 20.0, 640.0, 420.0),
            min_width: 360.0,
            min_height: 240.0,
            visible: false,
        }
    }

    #[test]
    fn created_hidden_then_shown() {
        let backend = HeadlessBackend::new();
        let id = backend.create_window(&spec()).unwrap();
        assert!(!backend.is_visible(id));
        backend.show_window(id).unwrap();
        assert!(backend.is_visible(id));
        assert_eq!(backend.window_frame(id).unwrap(), spec().bounds);
    }

    #[test]
    fn unknown_ids_are_destroyed() {
        let backend = HeadlessBackend::new();
        assert!(backend.is_destroyed(WindowId(99)));
        assert!(matches!(
            backend.window_frame(WindowId(99)),
            Err(PlatformError::WindowGone(99))
        ));
    }

    #[test]
    fn close_fires_closed_event_once() {
        let backend = HeadlessBackend::new();
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let _watch = backend
            .watch_windows(Box::new(move |event| {
                if matches!(event, WindowEvent::Closed(_)) {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
            }))
            .unwrap();

        let id = backend.create_window(&spec()).unwrap();
        backend.close_window(id).unwrap();
        assert!(backend.close_window(id).is_err());
        backend.simulate_user_close(id);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert!(backend.is_destroyed(id));
    }

    #[test]
    fn move_updates_live_frame() {
        let backend = HeadlessBackend::new();
        let id = backend.create_window(&spec()).unwrap();
        let frame = Rect::new(300.0, 200.0, 700.0, 500.0);
        backend.simulate_move(id, frame);
        assert_eq!(backend.window_frame(id).unwrap(), frame);
    }

    #[test]
    fn silent_destroy_emits_nothing() {
        let backend = HeadlessBackend::new();
        let events = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&events);
        let _watch = backend
            .watch_windows(Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();
        let id = backend.create_window(&spec()).unwrap();
        backend.destroy_silently(id);
        assert!(backend.is_destroyed(id));
        assert_eq!(events.load(Ordering::SeqCst), 0);
        assert_eq!(backend.live_count(), 0);
        assert_eq!(backend.created_count(), 1);
    }

    #[test]
    fn rejects_unusable_bounds() {
        let backend = HeadlessBackend::new();
        let mut bad = spec();
        bad.bounds = Rect::new(0.0, 0.0, f64::NAN, 100.0);
        assert!(matches!(
            backend.create_window(&bad),
            Err(PlatformError::WindowCreate(_))
        ));
    }
}
