//! Repair pass for layouts read from disk.
//!
//! Persisted trees may come from older or newer releases, or be hand-edited
//! into nonsense. [`sanitize`] never fails: it keeps every well-formed
//! subtree it can, drops what it cannot use, and appends whatever the
//! current catalogue still needs.

use std::collections::HashSet;

use quire_common::LayoutPaneId;
use serde_json::Value;
use tracing::debug;

use crate::presets::LayoutPreset;
use crate::tree::{
    ensure_pane_in_layout, SplitDirection, SplitNode, DEFAULT_SPLIT_PERCENTAGE,
    MAX_SPLIT_PERCENTAGE, MIN_SPLIT_PERCENTAGE,
};

/// Repair `raw` against `catalogue`, falling back to the default preset.
///
/// The result docks exactly the catalogue panes that are not `floating`,
/// each once. `None` means every pane is floating.
pub fn sanitize(
    raw: &Value,
    catalogue: &[LayoutPaneId],
    floating: &[LayoutPaneId],
) -> Option<SplitNode> {
    sanitize_with_fallback(raw, catalogue, floating, LayoutPreset::default())
}

/// Like [`sanitize`], with the preset used when nothing can be salvaged.
pub fn sanitize_with_fallback(
    raw: &Value,
    catalogue: &[LayoutPaneId],
    floating: &[LayoutPaneId],
    fallback: LayoutPreset,
) -> Option<SplitNode> {
    let mut seen = HashSet::new();
    let repaired = repair(raw, catalogue, floating, &mut seen);
    if repaired.is_none() {
        debug!(preset = %fallback, "no usable persisted layout, using preset");
        return normalize(fallback.tree(), catalogue, floating);
    }
    append_missing(repaired, catalogue, floating)
}

/// Bring an already well-typed tree in line with the catalogue: drop panes
/// outside it or currently floating, collapse duplicates, append missing
/// panes.
pub fn normalize(
    tree: SplitNode,
    catalogue: &[LayoutPaneId],
    floating: &[LayoutPaneId],
) -> Option<SplitNode> {
    let value = serde_json::to_value(&tree).unwrap_or(Value::Null);
    let mut seen = HashSet::new();
    let repaired = repair(&value, catalogue, floating, &mut seen);
    append_missing(repaired, catalogue, floating)
}

fn append_missing(
    mut tree: Option<SplitNode>,
    catalogue: &[LayoutPaneId],
    floating: &[LayoutPaneId],
) -> Option<SplitNode> {
    for &pane in catalogue {
        if floating.contains(&pane) {
            continue;
        }
        if !tree.as_ref().is_some_and(|t| t.contains_pane(pane)) {
            debug!(pane = %pane, "appending pane missing from layout");
            tree = Some(ensure_pane_in_layout(tree, pane));
        }
    }
    tree
}

fn repair(
    value: &Value,
    catalogue: &[LayoutPaneId],
    floating: &[LayoutPaneId],
    seen: &mut HashSet<LayoutPaneId>,
) -> Option<SplitNode> {
    match value {
        Value::String(name) => {
            let pane = match name.parse::<LayoutPaneId>() {
                Ok(pane) => pane,
                Err(_) => {
                    debug!(name = %name, "dropping unknown pane");
                    return None;
                }
            };
            if !catalogue.contains(&pane) || floating.contains(&pane) || !seen.insert(pane) {
                return None;
            }
            Some(SplitNode::Leaf(pane))
        }
        Value::Object(map) => {
            let first = map
                .get("first")
                .and_then(|v| repair(v, catalogue, floating, seen));
            let second = map
                .get("second")
                .and_then(|v| repair(v, catalogue, floating, seen));
            match (first, second) {
                (Some(first), Some(second)) => Some(SplitNode::Split {
                    direction: parse_direction(map.get("direction")),
                    split_percentage: parse_split_percentage(map.get("splitPercentage")),
                    first: Box::new(first),
                    second: Box::new(second),
                }),
                (Some(only), None) | (None, Some(only)) => Some(only),
                (None, None) => None,
            }
        }
        _ => None,
    }
}

fn parse_direction(value: Option<&Value>) -> SplitDirection {
    match value.and_then(Value::as_str) {
        Some("column") => SplitDirection::Column,
        _ => SplitDirection::Row,
    }
}

fn parse_split_percentage(value: Option<&Value>) -> f64 {
    match value.and_then(Value::as_f64) {
        Some(p) if (MIN_SPLIT_PERCENTAGE..=MAX_SPLIT_PERCENTAGE).contains(&p) => p,
        _ => DEFAULT_SPLIT_PERCENTAGE,
    }
}
