mod operations;
mod traversal;
mod types;

pub use operations::{ensure_pane_in_layout, remove_pane};
pub use types::*;
