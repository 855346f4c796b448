mod commands;
mod docking;
mod floating;
mod focus;
mod loading;
mod types;


pub use types::{DockWorkspace, PaneFrame, PaneState};
