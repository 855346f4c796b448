//! Workspace settings.
//!
//! TOML-based, user-level (not per project). Every section uses serde
//! defaults so a partial or empty file is valid.

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{
    FloatingConfig, KeybindConfig, LayoutConfig, PersistenceConfig, WorkspaceConfig,
};
pub use toml_writer::save_config_to_path;

use quire_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
///
/// Validation problems are logged by the loader; the parsed values are
/// still returned.
pub fn load_config() -> Result<WorkspaceConfig, ConfigError> {
    toml_loader::load_default()
}
