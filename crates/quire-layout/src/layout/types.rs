//! Layout engine types and configuration.

/// Configuration for the layout engine that computes pane positions.
pub struct LayoutEngine {
    /// Gap in pixels between panes.
    pub gap: u32,
    /// Outer padding in pixels around the entire dock area.
    pub outer_padding: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gap: 6,
            outer_padding: 0,
        }
    }
}
