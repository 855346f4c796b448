//! Layout calculation: recursive tree-to-rect computation.

use quire_common::{LayoutPaneId, Rect};

use crate::tree::{SplitDirection, SplitNode};

use super::LayoutEngine;

impl LayoutEngine {
    pub fn compute(&self, root: &SplitNode, bounds: Rect) -> Vec<(LayoutPaneId, Rect)> {
        let pad = self.outer_padding as f64;
        let inner = Rect {
            x: bounds.x + pad,
            y: bounds.y + pad,
            width: (bounds.width - 2.0 * pad).max(0.0),
            height: (bounds.height - 2.0 * pad).max(0.0),
        };
        let mut results = Vec::new();
        self.layout_node(root, inner, &mut results);
        results
    }

    fn layout_node(&self, node: &SplitNode, bounds: Rect, out: &mut Vec<(LayoutPaneId, Rect)>) {
        match node {
            SplitNode::Leaf(pane) => {
                out.push((*pane, bounds));
            }
            SplitNode::Split {
                direction,
                split_percentage,
                first,
                second,
            } => {
                let gap = self.gap as f64;
                let ratio = split_percentage / 100.0;
                let (a, b) = match direction {
                    SplitDirection::Row => {
                        let available_width = (bounds.width - gap).max(0.0);
                        let w1 = available_width * ratio;
                        let w2 = (available_width - w1).max(0.0);
                        (
                            Rect::new(bounds.x, bounds.y, w1, bounds.height),
                            Rect::new(bounds.x + w1 + gap, bounds.y, w2, bounds.height),
                        )
                    }
                    SplitDirection::Column => {
                        let available_height = (bounds.height - gap).max(0.0);
                        let h1 = available_height * ratio;
                        let h2 = (available_height - h1).max(0.0);
                        (
                            Rect::new(bounds.x, bounds.y, bounds.width, h1),
                            Rect::new(bounds.x, bounds.y + h1 + gap, bounds.width, h2),
                        )
                    }
                };
                self.layout_node(first, a, out);
                self.layout_node(second, b, out);
            }
        }
    }
}
