//! Content target for floating pane windows.
//!
//! The target carries the pane id and the owning project so the window's
//! content can configure itself with no further messages.

use std::path::{Path, PathBuf};

use quire_common::LayoutPaneId;

const TARGET_PREFIX: &str = "quire://localhost/floating.html";

/// `quire://localhost/floating.html?pane=<id>&project=<percent-encoded path>`.
pub fn floating_target_url(project: &Path, pane: LayoutPaneId) -> String {
    format!(
        "{TARGET_PREFIX}?pane={}&project={}",
        pane.as_str(),
        urlencoding::encode(&project.to_string_lossy())
    )
}

/// Recover `(pane, project)` from a target built by [`floating_target_url`].
pub fn parse_floating_target(url: &str) -> Option<(LayoutPaneId, PathBuf)> {
    let query = url.strip_prefix(TARGET_PREFIX)?.strip_prefix('?')?;

    let mut pane = None;
    let mut project = None;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=')?;
        match key {
            "pane" => pane = value.parse::<LayoutPaneId>().ok(),
            "project" => {
                project = urlencoding::decode(value)
                    .ok()
                    .map(|p| PathBuf::from(p.into_owned()))
            }
            _ => {}
        }
    }

    match (pane, project) {
        (Some(pane), Some(project)) if !project.as_os_str().is_empty() => Some((pane, project)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_pane_and_project() {
        let url = floating_target_url(
            Path::new("/work/my novel & notes"),
            LayoutPaneId::StoryInsights,
        );
        assert_eq!(
            url,
            "quire://localhost/floating.html?pane=storyInsights&project=%2Fwork%2Fmy%20novel%20%26%20notes"
        );
    }

    #[test]
    fn parse_recovers_identity() {
        let project = Path::new("/work/my novel & notes");
        let url = floating_target_url(project, LayoutPaneId::Critique);
        let (pane, parsed) = parse_floating_target(&url).unwrap();
        assert_eq!(pane, LayoutPaneId::Critique);
        assert_eq!(parsed, project);
    }

    #[test]
    fn parse_rejects_foreign_or_incomplete_targets() {
        assert!(
            parse_floating_target("https://example.com/floating.html?pane=outline&project=%2Fp")
                .is_none()
        );
        assert!(parse_floating_target("quire://localhost/floating.html?pane=outline").is_none());
        assert!(parse_floating_target("quire://localhost/floating.html?pane=ghost&project=%2Fp").is_none());
        assert!(parse_floating_target("quire://localhost/floating.html?project=").is_none());
    }
}
