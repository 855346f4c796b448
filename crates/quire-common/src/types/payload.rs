//! Persisted and bridged layout data.

use serde::{Deserialize, Serialize};

use super::{LayoutPaneId, Rect};

/// Version stamped on every saved layout. Advisory only: loading always
/// goes through the sanitizer, so older or newer files never need a
/// migration step.
pub const LAYOUT_SCHEMA_VERSION: u32 = 1;

/// A pane that lives (or lived) in its own native window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatingPaneDescriptor {
    pub id: LayoutPaneId,
    pub bounds: Rect,
}

/// Everything saved for one project.
///
/// `layout` is kept as raw JSON: whatever was on disk is handed to the
/// sanitizer untouched so that trees from other releases can be repaired
/// instead of rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedLayoutPayload {
    #[serde(default)]
    pub layout: serde_json::Value,
    #[serde(default)]
    pub floating_panes: Vec<FloatingPaneDescriptor>,
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}

fn default_schema_version() -> u32 {
    LAYOUT_SCHEMA_VERSION
}

impl PersistedLayoutPayload {
    pub fn new(layout: serde_json::Value, floating_panes: Vec<FloatingPaneDescriptor>) -> Self {
        Self {
            layout,
            floating_panes,
            schema_version: LAYOUT_SCHEMA_VERSION,
        }
    }

    /// Remembered geometry for a pane, if any.
    pub fn floating_bounds(&self, id: LayoutPaneId) -> Option<Rect> {
        self.floating_panes
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.bounds)
    }
}

impl Default for PersistedLayoutPayload {
    fn default() -> Self {
        Self::new(serde_json::Value::Null, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_camel_case_keys() {
        let payload = PersistedLayoutPayload::new(
            serde_json::json!("outline"),
            vec![FloatingPaneDescriptor {
                id: LayoutPaneId::Critique,
                bounds: Rect::new(10.0, 20.0, 640.0, 420.0),
            }],
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["layout"], "outline");
        assert_eq!(value["floatingPanes"][0]["id"], "critique");
        assert_eq!(value["floatingPanes"][0]["bounds"]["width"], 640.0);
        assert_eq!(value["schemaVersion"], LAYOUT_SCHEMA_VERSION);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let payload: PersistedLayoutPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.layout.is_null());
        assert!(payload.floating_panes.is_empty());
        assert_eq!(payload.schema_version, LAYOUT_SCHEMA_VERSION);
    }

    #[test]
    fn floating_bounds_lookup() {
        let bounds = Rect::new(0.0, 0.0, 300.0, 200.0);
        let payload = PersistedLayoutPayload::new(
            serde_json::Value::Null,
            vec![FloatingPaneDescriptor {
                id: LayoutPaneId::Timeline,
                bounds,
            }],
        );
        assert_eq!(payload.floating_bounds(LayoutPaneId::Timeline), Some(bounds));
        assert_eq!(payload.floating_bounds(LayoutPaneId::Outline), None);
    }
}
