use quire_common::LayoutPaneId;

use crate::presets::LayoutPreset;

/// User-level actions on the dock, as produced by hotkeys and menus.
#[derive(Debug, Clone, PartialEq)]
pub enum DockCommand {
    FocusNext,
    FocusPrev,
    Focus(LayoutPaneId),
    /// Close the focused pane's tile (it becomes hidden).
    CloseFocused,
    /// Float the focused pane into its own window.
    FloatFocused,
    /// Bring a hidden pane back into the dock.
    Show(LayoutPaneId),
    /// Return every floating pane to the dock.
    DockAll,
    /// Grow (positive) or shrink the focused pane, in percentage points.
    Resize(f64),
    ApplyPreset(LayoutPreset),
}
