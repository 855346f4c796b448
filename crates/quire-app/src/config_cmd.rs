//! `quire config write`.

use std::io::Write;
use std::path::Path;

use quire_common::QuireError;
use quire_config::toml_loader::default_config_path;
use quire_config::{save_config_to_path, WorkspaceConfig};

/// Write `config` to `target`, or to the platform config file.
pub fn write(
    config: &WorkspaceConfig,
    target: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), QuireError> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    save_config_to_path(config, &path)?;
    writeln!(out, "wrote {}", path.display())?;
    Ok(())
}
