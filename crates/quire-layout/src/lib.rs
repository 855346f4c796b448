//! Split-tree model for the docked workspace.
//!
//! The tree is strictly binary: leaves are catalogue panes, internal nodes
//! are row/column splits with exactly two children. An empty workspace (all
//! panes hidden or floating) is represented as `None` by callers.

pub mod commands;
pub mod layout;
pub mod presets;
pub mod sanitize;
pub mod tree;

pub use commands::DockCommand;
pub use layout::LayoutEngine;
pub use presets::LayoutPreset;
pub use sanitize::{normalize, sanitize, sanitize_with_fallback};
pub use tree::{ensure_pane_in_layout, remove_pane, SplitDirection, SplitNode};
