//! Structural edits: insert, remove, resize.

use quire_common::LayoutPaneId;

use super::types::{MAX_SPLIT_PERCENTAGE, MIN_SPLIT_PERCENTAGE};
use super::{SplitDirection, SplitNode};

/// Make sure `pane` is docked somewhere in `tree`.
///
/// Returns the tree unchanged when the pane is already a leaf. Otherwise
/// the existing tree becomes the `first` child of a new root split and the
/// pane its `second`; the new split runs perpendicular to the old root so
/// repeated insertions do not produce one long strip. The split share is
/// proportional to the pane counts so the newcomer gets a fair slice.
pub fn ensure_pane_in_layout(tree: Option<SplitNode>, pane: LayoutPaneId) -> SplitNode {
    match tree {
        None => SplitNode::leaf(pane),
        Some(tree) if tree.contains_pane(pane) => tree,
        Some(tree) => {
            let direction = match &tree {
                SplitNode::Split { direction, .. } => direction.perpendicular(),
                SplitNode::Leaf(_) => SplitDirection::Row,
            };
            let existing = tree.pane_count() as f64;
            let share = existing / (existing + 1.0) * 100.0;
            SplitNode::split(direction, share, tree, SplitNode::leaf(pane))
        }
    }
}

/// Remove every leaf showing `pane`. The sibling of a removed leaf takes
/// the place of its parent split. Removing the last pane yields `None`.
pub fn remove_pane(tree: SplitNode, pane: LayoutPaneId) -> Option<SplitNode> {
    tree.without_pane(pane)
}

impl SplitNode {
    pub fn without_pane(self, pane: LayoutPaneId) -> Option<SplitNode> {
        match self {
            SplitNode::Leaf(id) if id == pane => None,
            leaf @ SplitNode::Leaf(_) => Some(leaf),
            SplitNode::Split {
                direction,
                split_percentage,
                first,
                second,
            } => match (first.without_pane(pane), second.without_pane(pane)) {
                (Some(first), Some(second)) => Some(SplitNode::Split {
                    direction,
                    split_percentage,
                    first: Box::new(first),
                    second: Box::new(second),
                }),
                (Some(only), None) | (None, Some(only)) => Some(only),
                (None, None) => None,
            },
        }
    }

    /// Adjust the split share at the parent of the given pane.
    /// `delta` (percentage points) grows the pane, clamped to [10, 90].
    /// Returns `true` if the pane was found in a split.
    pub fn adjust_split(&mut self, target: LayoutPaneId, delta: f64) -> bool {
        match self {
            SplitNode::Leaf(_) => false,
            SplitNode::Split {
                split_percentage,
                first,
                second,
                ..
            } => {
                if first.contains_pane(target) && !second.contains_pane(target) {
                    if matches!(first.as_ref(), SplitNode::Leaf(id) if *id == target) {
                        *split_percentage = (*split_percentage + delta)
                            .clamp(MIN_SPLIT_PERCENTAGE, MAX_SPLIT_PERCENTAGE);
                        return true;
                    }
                    return first.adjust_split(target, delta);
                }
                if second.contains_pane(target) && !first.contains_pane(target) {
                    if matches!(second.as_ref(), SplitNode::Leaf(id) if *id == target) {
                        // Growing the second child shrinks the first's share
                        *split_percentage = (*split_percentage - delta)
                            .clamp(MIN_SPLIT_PERCENTAGE, MAX_SPLIT_PERCENTAGE);
                        return true;
                    }
                    return second.adjust_split(target, delta);
                }
                false
            }
        }
    }
}
