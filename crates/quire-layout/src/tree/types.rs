//! Core types for the split tree: SplitDirection and SplitNode.

use quire_common::LayoutPaneId;
use serde::{Deserialize, Serialize};

/// Smallest share either side of a split may take, in percent.
pub const MIN_SPLIT_PERCENTAGE: f64 = 10.0;
/// Largest share the first child of a split may take, in percent.
pub const MAX_SPLIT_PERCENTAGE: f64 = 90.0;
pub const DEFAULT_SPLIT_PERCENTAGE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// Children side by side.
    Row,
    /// Children stacked top to bottom.
    Column,
}

impl SplitDirection {
    pub fn perpendicular(self) -> Self {
        match self {
            SplitDirection::Row => SplitDirection::Column,
            SplitDirection::Column => SplitDirection::Row,
        }
    }
}

/// One node of the docked layout.
///
/// Serialized leaves are bare pane names (`"outline"`); splits are objects
/// with `direction`, `first`, `second` and `splitPercentage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SplitNode {
    Leaf(LayoutPaneId),
    #[serde(rename_all = "camelCase")]
    Split {
        direction: SplitDirection,
        /// Share of the first child, in percent.
        #[serde(default = "default_split_percentage")]
        split_percentage: f64,
        first: Box<SplitNode>,
        second: Box<SplitNode>,
    },
}

fn default_split_percentage() -> f64 {
    DEFAULT_SPLIT_PERCENTAGE
}

impl SplitNode {
    pub fn leaf(pane: LayoutPaneId) -> Self {
        SplitNode::Leaf(pane)
    }

    pub fn split(
        direction: SplitDirection,
        split_percentage: f64,
        first: SplitNode,
        second: SplitNode,
    ) -> Self {
        SplitNode::Split {
            direction,
            split_percentage: split_percentage.clamp(MIN_SPLIT_PERCENTAGE, MAX_SPLIT_PERCENTAGE),
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn row(first: SplitNode, second: SplitNode) -> Self {
        Self::split(SplitDirection::Row, DEFAULT_SPLIT_PERCENTAGE, first, second)
    }

    pub fn column(first: SplitNode, second: SplitNode) -> Self {
        Self::split(SplitDirection::Column, DEFAULT_SPLIT_PERCENTAGE, first, second)
    }

    pub fn pane_count(&self) -> usize {
        match self {
            SplitNode::Leaf(_) => 1,
            SplitNode::Split { first, second, .. } => first.pane_count() + second.pane_count(),
        }
    }

    pub fn contains_pane(&self, id: LayoutPaneId) -> bool {
        match self {
            SplitNode::Leaf(pane) => *pane == id,
            SplitNode::Split { first, second, .. } => {
                first.contains_pane(id) || second.contains_pane(id)
            }
        }
    }

    /// Collect all pane ids in left-to-right (depth-first) order.
    pub fn collect_pane_ids(&self) -> Vec<LayoutPaneId> {
        let mut ids = Vec::new();
        self.collect_ids_into(&mut ids);
        ids
    }

    fn collect_ids_into(&self, out: &mut Vec<LayoutPaneId>) {
        match self {
            SplitNode::Leaf(pane) => out.push(*pane),
            SplitNode::Split { first, second, .. } => {
                first.collect_ids_into(out);
                second.collect_ids_into(out);
            }
        }
    }

    /// Render the tree as an indented outline, one node per line.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_into(&mut out, 0);
        out
    }

    fn describe_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            SplitNode::Leaf(pane) => {
                out.push_str(&format!("{indent}{pane}\n"));
            }
            SplitNode::Split {
                direction,
                split_percentage,
                first,
                second,
            } => {
                let kind = match direction {
                    SplitDirection::Row => "row",
                    SplitDirection::Column => "column",
                };
                out.push_str(&format!("{indent}{kind} ({split_percentage:.0}%)\n"));
                first.describe_into(out, depth + 1);
                second.describe_into(out, depth + 1);
            }
        }
    }
}
