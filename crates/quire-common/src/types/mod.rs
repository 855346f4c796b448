mod geometry;
mod pane;
mod payload;

pub use geometry::Rect;
pub use pane::LayoutPaneId;
pub use payload::{FloatingPaneDescriptor, PersistedLayoutPayload, LAYOUT_SCHEMA_VERSION};
