//! Built-in arrangements of the full pane catalogue.

use std::fmt;
use std::str::FromStr;

use quire_common::LayoutPaneId::*;
use serde::{Deserialize, Serialize};

use crate::tree::{SplitDirection::*, SplitNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreset {
    /// Outline rail, large draft, insights stacked on the right.
    #[default]
    Writing,
    /// Draft beside critique, everything else tucked away.
    Review,
    /// Corkboard and timeline across the top.
    Planning,
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 3] = [
        LayoutPreset::Writing,
        LayoutPreset::Review,
        LayoutPreset::Planning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutPreset::Writing => "writing",
            LayoutPreset::Review => "review",
            LayoutPreset::Planning => "planning",
        }
    }

    /// The preset's tree over the full catalogue.
    pub fn tree(self) -> SplitNode {
        let leaf = SplitNode::leaf;
        match self {
            LayoutPreset::Writing => SplitNode::split(
                Row,
                20.0,
                leaf(Outline),
                SplitNode::split(
                    Row,
                    68.0,
                    SplitNode::split(Column, 70.0, leaf(DraftPreview), leaf(Critique)),
                    SplitNode::split(
                        Column,
                        40.0,
                        leaf(StoryInsights),
                        SplitNode::split(
                            Column,
                            50.0,
                            leaf(Corkboard),
                            SplitNode::split(Row, 50.0, leaf(Timeline), leaf(RelationshipGraph)),
                        ),
                    ),
                ),
            ),
            LayoutPreset::Review => SplitNode::split(
                Row,
                50.0,
                leaf(DraftPreview),
                SplitNode::split(
                    Column,
                    45.0,
                    leaf(Critique),
                    SplitNode::split(
                        Row,
                        50.0,
                        leaf(StoryInsights),
                        SplitNode::split(
                            Column,
                            40.0,
                            leaf(Outline),
                            SplitNode::split(
                                Column,
                                50.0,
                                leaf(Corkboard),
                                SplitNode::split(
                                    Row,
                                    50.0,
                                    leaf(Timeline),
                                    leaf(RelationshipGraph),
                                ),
                            ),
                        ),
                    ),
                ),
            ),
            LayoutPreset::Planning => SplitNode::split(
                Column,
                55.0,
                SplitNode::split(Row, 50.0, leaf(Corkboard), leaf(Timeline)),
                SplitNode::split(
                    Row,
                    34.0,
                    leaf(Outline),
                    SplitNode::split(
                        Row,
                        50.0,
                        leaf(RelationshipGraph),
                        SplitNode::split(
                            Column,
                            50.0,
                            leaf(StoryInsights),
                            SplitNode::split(Row, 50.0, leaf(DraftPreview), leaf(Critique)),
                        ),
                    ),
                ),
            ),
        }
    }
}

impl fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutPreset::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown layout preset: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_common::LayoutPaneId;

    #[test]
    fn every_preset_docks_the_whole_catalogue_once() {
        for preset in LayoutPreset::ALL {
            let mut ids = preset.tree().collect_pane_ids();
            ids.sort();
            let mut expected = LayoutPaneId::ALL.to_vec();
            expected.sort();
            assert_eq!(ids, expected, "preset {preset}");
        }
    }

    #[test]
    fn default_is_writing() {
        assert_eq!(LayoutPreset::default(), LayoutPreset::Writing);
        assert_eq!(LayoutPreset::Writing.tree().first_pane(), Outline);
    }

    #[test]
    fn parse_names() {
        assert_eq!("review".parse::<LayoutPreset>().unwrap(), LayoutPreset::Review);
        assert!("focus".parse::<LayoutPreset>().is_err());
    }
}
