//! Pane rectangle computation for the docked tree.

mod calculation;
mod types;

pub use types::LayoutEngine;
