//! Ordered traversal over docked panes.

use quire_common::LayoutPaneId;

use super::SplitNode;

impl SplitNode {
    /// Get the next pane in tree order after `current`, wrapping around.
    pub fn next_pane(&self, current: LayoutPaneId) -> Option<LayoutPaneId> {
        let ids = self.collect_pane_ids();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current)?;
        Some(ids[(idx + 1) % ids.len()])
    }

    /// Get the previous pane in tree order before `current`, wrapping around.
    pub fn prev_pane(&self, current: LayoutPaneId) -> Option<LayoutPaneId> {
        let ids = self.collect_pane_ids();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current)?;
        Some(ids[(idx + ids.len() - 1) % ids.len()])
    }

    pub fn first_pane(&self) -> LayoutPaneId {
        match self {
            SplitNode::Leaf(id) => *id,
            SplitNode::Split { first, .. } => first.first_pane(),
        }
    }
}
