//! The closed catalogue of workspace panes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every pane the workspace knows how to render.
///
/// The set is fixed at build time. Persisted layouts written by other
/// releases may name panes that are not listed here; those are dropped on
/// load rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutPaneId {
    Outline,
    DraftPreview,
    StoryInsights,
    Corkboard,
    Timeline,
    Critique,
    RelationshipGraph,
}

impl LayoutPaneId {
    /// The full catalogue in display order.
    pub const ALL: [LayoutPaneId; 7] = [
        LayoutPaneId::Outline,
        LayoutPaneId::DraftPreview,
        LayoutPaneId::StoryInsights,
        LayoutPaneId::Corkboard,
        LayoutPaneId::Timeline,
        LayoutPaneId::Critique,
        LayoutPaneId::RelationshipGraph,
    ];

    /// Identifier used in persisted files, window targets and config.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutPaneId::Outline => "outline",
            LayoutPaneId::DraftPreview => "draftPreview",
            LayoutPaneId::StoryInsights => "storyInsights",
            LayoutPaneId::Corkboard => "corkboard",
            LayoutPaneId::Timeline => "timeline",
            LayoutPaneId::Critique => "critique",
            LayoutPaneId::RelationshipGraph => "relationshipGraph",
        }
    }

    /// Human-readable title for tile headers and window titles.
    pub fn title(self) -> &'static str {
        match self {
            LayoutPaneId::Outline => "Outline",
            LayoutPaneId::DraftPreview => "Draft",
            LayoutPaneId::StoryInsights => "Story Insights",
            LayoutPaneId::Corkboard => "Corkboard",
            LayoutPaneId::Timeline => "Timeline",
            LayoutPaneId::Critique => "Critique",
            LayoutPaneId::RelationshipGraph => "Relationships",
        }
    }

    /// Map an identifier from an older release onto the current catalogue.
    ///
    /// No pane has been renamed yet, so this always yields `None` and a
    /// renamed pane is treated as removed + added.
    pub fn from_legacy_name(_name: &str) -> Option<LayoutPaneId> {
        None
    }
}

impl fmt::Display for LayoutPaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutPaneId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutPaneId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .or_else(|| LayoutPaneId::from_legacy_name(s))
            .ok_or_else(|| format!("unknown pane: {s}"))
    }
}
