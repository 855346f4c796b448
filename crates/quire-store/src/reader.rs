//! Loading a persisted payload.

use std::collections::HashSet;
use std::path::Path;

use quire_common::{FloatingPaneDescriptor, PersistedLayoutPayload, LAYOUT_SCHEMA_VERSION};
use serde_json::Value;
use tracing::{debug, warn};

use crate::paths::layout_file_path;

/// Read the persisted layout for `project`.
///
/// Returns `None` when the file is missing, unreadable, or not a JSON
/// object. Never fails.
pub fn load(project: &Path) -> Option<PersistedLayoutPayload> {
    let path = layout_file_path(project);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(project = %project.display(), "no persisted layout");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), "failed to read persisted layout: {e}");
            return None;
        }
    };

    let payload = parse_payload(&content);
    if payload.is_none() {
        warn!(path = %path.display(), "ignoring malformed persisted layout");
    }
    payload
}

/// Parse a payload document.
///
/// The `layout` value is passed through untouched. Floating descriptors are
/// read one by one: entries that do not parse are skipped and a pane listed
/// twice keeps its first entry. A missing `schemaVersion` is taken as the
/// current one.
pub fn parse_payload(content: &str) -> Option<PersistedLayoutPayload> {
    let value: Value = serde_json::from_str(content).ok()?;
    let Value::Object(mut map) = value else {
        return None;
    };

    let layout = map.remove("layout").unwrap_or(Value::Null);

    let mut seen = HashSet::new();
    let floating_panes = match map.remove("floatingPanes") {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| {
                serde_json::from_value::<FloatingPaneDescriptor>(entry)
                    .map_err(|e| debug!("skipping floating pane entry: {e}"))
                    .ok()
            })
            .filter(|descriptor| seen.insert(descriptor.id))
            .collect(),
        _ => Vec::new(),
    };

    let schema_version = map
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(LAYOUT_SCHEMA_VERSION);

    Some(PersistedLayoutPayload {
        layout,
        floating_panes,
        schema_version,
    })
}
