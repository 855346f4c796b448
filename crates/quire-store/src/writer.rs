//! Saving and resetting a persisted payload.
//!
//! Saves write the whole document to a uniquely named temp file beside the
//! target and rename it into place, so readers only ever see a complete
//! document.

use std::io::Write;
use std::path::Path;

use quire_common::{PersistedLayoutPayload, StoreError};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::paths::layout_file_path;

/// Write `payload` for `project`, creating the hidden directory if needed.
pub fn save(project: &Path, payload: &PersistedLayoutPayload) -> Result<(), StoreError> {
    if project.as_os_str().is_empty() {
        return Err(StoreError::Path("empty project path".into()));
    }

    let path = layout_file_path(project);
    let json = serde_json::to_string_pretty(payload)
        .map_err(|e| StoreError::Serialize(e.to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // One temp file per call; saves for the same project may run concurrently.
    let dir = path.parent().unwrap_or(project);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|source| StoreError::Io {
            path: tmp.path().to_path_buf(),
            source,
        })?;
    tmp.persist(&path).map_err(|e| StoreError::Io {
        path: path.clone(),
        source: e.error,
    })?;

    debug!(
        project = %project.display(),
        floating = payload.floating_panes.len(),
        "layout saved"
    );
    Ok(())
}

/// Delete the persisted layout for `project`. A missing file is fine.
pub fn reset(project: &Path) -> Result<(), StoreError> {
    let path = layout_file_path(project);
    match std::fs::remove_file(&path) {
        Ok(()) => {
            info!(project = %project.display(), "persisted layout removed");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Io { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::load;
    use quire_common::{FloatingPaneDescriptor, LayoutPaneId, Rect};
    use serde_json::json;

    fn sample_payload() -> PersistedLayoutPayload {
        PersistedLayoutPayload::new(
            json!({"direction": "row", "splitPercentage": 30, "first": "outline", "second": "critique"}),
            vec![FloatingPaneDescriptor {
                id: LayoutPaneId::Timeline,
                bounds: Rect::new(100.0, 80.0, 640.0, 420.0),
            }],
        )
    }

    #[test]
    fn save_creates_hidden_dir_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let payload = sample_payload();

        save(dir.path(), &payload).unwrap();
        assert!(dir.path().join(".quire").is_dir());

        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded.layout, payload.layout);
        assert_eq!(loaded.floating_panes, payload.floating_panes);
        assert_eq!(loaded.schema_version, payload.schema_version);
    }

    #[test]
    fn save_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        save(dir.path(), &sample_payload()).unwrap();
        save(dir.path(), &PersistedLayoutPayload::new(json!("outline"), vec![])).unwrap();

        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded.layout, json!("outline"));
        assert!(loaded.floating_panes.is_empty());
        let leftovers = std::fs::read_dir(dir.path().join(".quire")).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn concurrent_saves_never_leave_a_torn_file() {
        let dir = tempfile::tempdir().unwrap();
        let long = sample_payload();
        let short = PersistedLayoutPayload::new(json!("outline"), vec![]);
        save(dir.path(), &long).unwrap();

        std::thread::scope(|scope| {
            let dir = &dir;
            for i in 0..6 {
                let payload = if i % 2 == 0 { &long } else { &short };
                scope.spawn(move || {
                    for _ in 0..25 {
                        save(dir.path(), payload).unwrap();
                    }
                });
            }
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(load(dir.path()).is_some());
                }
            });
        });

        let loaded = load(dir.path()).unwrap();
        assert!(loaded.layout == long.layout || loaded.layout == short.layout);
        let leftovers = std::fs::read_dir(dir.path().join(".quire")).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn save_rejects_empty_project_path() {
        let err = save(Path::new(""), &sample_payload()).unwrap_err();
        assert!(matches!(err, StoreError::Path(_)));
    }

    #[test]
    fn save_reports_io_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join(".quire");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = save(dir.path(), &sample_payload()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn reset_removes_file_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        save(dir.path(), &sample_payload()).unwrap();

        reset(dir.path()).unwrap();
        assert!(load(dir.path()).is_none());
        reset(dir.path()).unwrap();
    }
}
