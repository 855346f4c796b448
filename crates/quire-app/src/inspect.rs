//! `quire inspect` and `quire reset`.

use std::io::Write;
use std::path::Path;

use quire_common::{LayoutPaneId, QuireError};
use quire_layout::{sanitize_with_fallback, LayoutPreset};

/// Write a readable summary of `project`'s saved layout to `out`.
pub fn inspect(project: &Path, preset: LayoutPreset, out: &mut impl Write) -> Result<(), QuireError> {
    let file = quire_store::layout_file_path(project);
    writeln!(out, "project: {}", project.display())?;

    let payload = quire_store::load(project);
    let layout = match &payload {
        Some(payload) => {
            writeln!(out, "file: {} (schema {})", file.display(), payload.schema_version)?;
            payload.layout.clone()
        }
        None => {
            writeln!(out, "file: none, using the {preset} preset")?;
            serde_json::Value::Null
        }
    };

    let tree = sanitize_with_fallback(&layout, &LayoutPaneId::ALL, &[], preset);
    writeln!(out, "layout:")?;
    match &tree {
        Some(tree) => {
            for line in tree.describe().lines() {
                writeln!(out, "  {line}")?;
            }
            let docked: Vec<&str> = tree
                .collect_pane_ids()
                .into_iter()
                .map(LayoutPaneId::as_str)
                .collect();
            writeln!(out, "docked: {}", docked.join(", "))?;
        }
        None => writeln!(out, "  (empty)")?,
    }

    let floating = payload
        .as_ref()
        .map(|p| p.floating_panes.as_slice())
        .unwrap_or_default();
    if floating.is_empty() {
        writeln!(out, "floating bounds: none")?;
    } else {
        writeln!(out, "floating bounds:")?;
        for descriptor in floating {
            let b = descriptor.bounds;
            writeln!(
                out,
                "  {}: {}x{} at ({}, {})",
                descriptor.id, b.width, b.height, b.x, b.y
            )?;
        }
    }
    Ok(())
}

/// Delete the saved layout; the next load uses the default preset.
pub fn reset(project: &Path, out: &mut impl Write) -> Result<(), QuireError> {
    quire_store::reset(project)?;
    writeln!(out, "layout reset for {}", project.display())?;
    Ok(())
}
