//! Per-project layout persistence.
//!
//! One JSON document per project at `<project>/.quire/layout.json`. Reads are
//! forgiving: a missing, unreadable or malformed file is "no saved layout".
//! The tree inside is kept as raw JSON; repairing it is the sanitizer's job.

mod paths;
mod reader;
mod writer;

pub use paths::{layout_file_path, LAYOUT_DIR_NAME, LAYOUT_FILE_NAME};
pub use reader::{load, parse_payload};
pub use writer::{reset, save};
