//! Navigation tree model and builder for the tsdevstack docs homepage.
//!
//! Transforms the hand-authored sidebar descriptor into an in-memory tree of
//! [`NavNode`] values and exposes it to the rendering host:
//!
//! - [`build`]: descriptor entries to owned tree, with fail-fast validation
//! - [`iter`]: depth-first pre-order traversal in authored order
//! - [`routes`]: flat routing table of every linked node
//!
//! The tree is constructed once at startup and never mutated afterwards, so
//! it can be read concurrently without synchronization.

use std::collections::HashSet;

use serde::Serialize;
use tsd_config::SidebarEntry;

/// One entry in the sidebar tree.
///
/// A node is either a leaf (a link with no children) or a group (children
/// with an optional link of its own). The group-with-link hybrid covers
/// provider "Overview" pages; whether selecting such a group navigates or
/// only expands is host routing policy.
///
/// Each parent exclusively owns its children; insertion order is display
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// A node with a resolvable link and no children.
    Leaf {
        /// Display text.
        label: String,
        /// Link target path.
        link: String,
    },
    /// A node whose primary role is to contain children.
    Group {
        /// Display text.
        label: String,
        /// Optional link for the group itself.
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<String>,
        /// Child nodes in display order.
        children: Vec<NavNode>,
    },
}

impl NavNode {
    /// Display text of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Group { label, .. } => label,
        }
    }

    /// Link target, if this node carries one.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Leaf { link, .. } => Some(link),
            Self::Group { link, .. } => link.as_deref(),
        }
    }

    /// Children of this node (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }

    /// True if this node is a group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}

/// One entry in the routing table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Display text of the linked node.
    pub label: String,
    /// Link target path.
    pub link: String,
}

/// Navigation build error.
///
/// Descriptor errors are fatal at build time. Messages name the offending
/// node by its path in the tree (labels joined by `>`).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavError {
    /// Entry with an empty label, an empty link, or neither link nor items.
    #[error("malformed navigation node at \"{path}\": {reason}")]
    MalformedNode {
        /// Path of the offending node in the tree.
        path: String,
        /// What is wrong with the node.
        reason: String,
    },
    /// Two sibling entries sharing a label.
    #[error("duplicate sibling label \"{label}\" under \"{path}\"")]
    DuplicateSibling {
        /// Path of the parent whose children collide (`sidebar` at root).
        path: String,
        /// The colliding label.
        label: String,
    },
}

/// Build the navigation tree from descriptor sidebar entries.
///
/// Pure data transformation: order-preserving, depth-preserving, and
/// deterministic. Rebuilding from the same entries yields a structurally
/// identical tree.
///
/// # Errors
///
/// Returns [`NavError::MalformedNode`] for entries with an empty label, an
/// empty link string, or neither a link nor non-empty items, and
/// [`NavError::DuplicateSibling`] when two siblings share a label. The
/// error names the offending node path.
pub fn build(entries: &[SidebarEntry]) -> Result<Vec<NavNode>, NavError> {
    build_level(entries, "sidebar")
}

/// Build one sibling level, checking labels and recursing into groups.
fn build_level(entries: &[SidebarEntry], parent_path: &str) -> Result<Vec<NavNode>, NavError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    let mut nodes = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let path = node_path(parent_path, entry, i);

        if entry.text.is_empty() {
            return Err(NavError::MalformedNode {
                path,
                reason: "empty label".to_owned(),
            });
        }
        if !seen.insert(entry.text.as_str()) {
            return Err(NavError::DuplicateSibling {
                path: parent_path.to_owned(),
                label: entry.text.clone(),
            });
        }
        if entry.link.as_deref() == Some("") {
            return Err(NavError::MalformedNode {
                path,
                reason: "empty link".to_owned(),
            });
        }

        let node = if entry.items.is_empty() {
            let Some(link) = entry.link.clone() else {
                return Err(NavError::MalformedNode {
                    path,
                    reason: "neither link nor items".to_owned(),
                });
            };
            NavNode::Leaf {
                label: entry.text.clone(),
                link,
            }
        } else {
            NavNode::Group {
                label: entry.text.clone(),
                link: entry.link.clone(),
                children: build_level(&entry.items, &path)?,
            }
        };
        nodes.push(node);
    }

    Ok(nodes)
}

/// Path of a node for error reporting.
///
/// Labels joined by `>`, rooted at `sidebar`. Unlabeled entries are
/// identified by their 1-based sibling position.
fn node_path(parent_path: &str, entry: &SidebarEntry, index: usize) -> String {
    if entry.text.is_empty() {
        format!("{parent_path} > #{}", index + 1)
    } else {
        format!("{parent_path} > {}", entry.text)
    }
}

/// Depth-first pre-order traversal over a node sequence.
///
/// Visits nodes in exactly the authored nesting order: each node before its
/// children, siblings left to right.
pub fn iter(nodes: &[NavNode]) -> PreOrder<'_> {
    let mut stack: Vec<&NavNode> = nodes.iter().collect();
    stack.reverse();
    PreOrder { stack }
}

/// Iterator returned by [`iter`].
pub struct PreOrder<'a> {
    stack: Vec<&'a NavNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a NavNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Flat routing table of every linked node, in pre-order.
///
/// Includes leaves and linked groups. The host maps each `link` to a content
/// document; breaking any of these paths is a regression.
#[must_use]
pub fn routes(nodes: &[NavNode]) -> Vec<Route> {
    iter(nodes)
        .filter_map(|node| {
            node.link().map(|link| Route {
                label: node.label().to_owned(),
                link: link.to_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn getting_started() -> SidebarEntry {
        SidebarEntry::group(
            "Getting Started",
            vec![
                SidebarEntry::leaf("Quick Start", "/getting-started/quick-start"),
                SidebarEntry::leaf("Prerequisites", "/getting-started/prerequisites"),
            ],
        )
    }

    fn gcp_provider() -> SidebarEntry {
        SidebarEntry::group(
            "GCP",
            vec![
                SidebarEntry::leaf("Overview", "/infrastructure/providers/gcp/"),
                SidebarEntry::leaf("Account Setup", "/infrastructure/providers/gcp/account-setup"),
                SidebarEntry::leaf("CI/CD", "/infrastructure/providers/gcp/cicd"),
            ],
        )
    }

    #[test]
    fn test_build_getting_started_group() {
        let nodes = build(&[getting_started()]).unwrap();
        assert_eq!(nodes.len(), 1);
        let group = &nodes[0];
        assert!(group.is_group());
        assert_eq!(group.label(), "Getting Started");
        assert_eq!(group.link(), None);
        assert_eq!(
            group.children(),
            &[
                NavNode::Leaf {
                    label: "Quick Start".to_owned(),
                    link: "/getting-started/quick-start".to_owned(),
                },
                NavNode::Leaf {
                    label: "Prerequisites".to_owned(),
                    link: "/getting-started/prerequisites".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_build_group_with_grandchildren() {
        let infra = SidebarEntry::group("Infrastructure", vec![gcp_provider()]);
        let nodes = build(&[infra]).unwrap();
        let gcp = &nodes[0].children()[0];
        assert!(gcp.is_group());
        assert_eq!(gcp.children().len(), 3);
        // Every descendant leaf carries a non-empty link
        for node in iter(nodes[0].children()) {
            if !node.is_group() {
                assert!(!node.link().unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_build_group_with_link_hybrid() {
        let entry = SidebarEntry {
            text: "GCP".to_owned(),
            link: Some("/infrastructure/providers/gcp/".to_owned()),
            items: vec![SidebarEntry::leaf(
                "Account Setup",
                "/infrastructure/providers/gcp/account-setup",
            )],
        };
        let nodes = build(&[entry]).unwrap();
        assert!(nodes[0].is_group());
        assert_eq!(nodes[0].link(), Some("/infrastructure/providers/gcp/"));
    }

    #[test]
    fn test_build_rejects_empty_label() {
        let entry = SidebarEntry::leaf("", "/somewhere");
        let err = build(&[entry]).unwrap_err();
        assert_eq!(
            err,
            NavError::MalformedNode {
                path: "sidebar > #1".to_owned(),
                reason: "empty label".to_owned(),
            }
        );
    }

    #[test]
    fn test_build_rejects_entry_without_link_or_items() {
        let entry = SidebarEntry {
            text: "Dangling".to_owned(),
            link: None,
            items: Vec::new(),
        };
        let err = build(&[entry]).unwrap_err();
        assert_eq!(
            err,
            NavError::MalformedNode {
                path: "sidebar > Dangling".to_owned(),
                reason: "neither link nor items".to_owned(),
            }
        );
    }

    #[test]
    fn test_build_rejects_empty_link() {
        let entry = SidebarEntry::leaf("Broken", "");
        let err = build(&[entry]).unwrap_err();
        assert!(err.to_string().contains("sidebar > Broken"));
        assert!(err.to_string().contains("empty link"));
    }

    #[test]
    fn test_build_rejects_duplicate_siblings() {
        let group = SidebarEntry::group(
            "Guide",
            vec![
                SidebarEntry::leaf("Setup", "/guide/setup"),
                SidebarEntry::leaf("Setup", "/guide/setup-2"),
            ],
        );
        let err = build(&[group]).unwrap_err();
        assert_eq!(
            err,
            NavError::DuplicateSibling {
                path: "sidebar > Guide".to_owned(),
                label: "Setup".to_owned(),
            }
        );
    }

    #[test]
    fn test_duplicate_labels_allowed_across_levels() {
        // "Overview" appears under several providers in the real sidebar;
        // only siblings must be distinct.
        let infra = SidebarEntry::group(
            "Infrastructure",
            vec![
                SidebarEntry::group(
                    "GCP",
                    vec![SidebarEntry::leaf("Overview", "/infrastructure/providers/gcp/")],
                ),
                SidebarEntry::group(
                    "AWS",
                    vec![SidebarEntry::leaf("Overview", "/infrastructure/providers/aws/")],
                ),
            ],
        );
        assert!(build(&[infra]).is_ok());
    }

    #[test]
    fn test_error_names_nested_path() {
        let infra = SidebarEntry::group(
            "Infrastructure",
            vec![SidebarEntry::group(
                "GCP",
                vec![SidebarEntry {
                    text: "Dangling".to_owned(),
                    link: None,
                    items: Vec::new(),
                }],
            )],
        );
        let err = build(&[infra]).unwrap_err();
        assert!(
            err.to_string()
                .contains("sidebar > Infrastructure > GCP > Dangling"),
            "got: {err}"
        );
    }

    #[test]
    fn test_preorder_matches_authored_order() {
        let entries = vec![
            SidebarEntry::group(
                "A",
                vec![
                    SidebarEntry::leaf("A1", "/a/1"),
                    SidebarEntry::group("A2", vec![SidebarEntry::leaf("A2a", "/a/2/a")]),
                ],
            ),
            SidebarEntry::leaf("B", "/b"),
        ];
        let nodes = build(&entries).unwrap();
        let labels: Vec<&str> = iter(&nodes).map(NavNode::label).collect();
        assert_eq!(labels, vec!["A", "A1", "A2", "A2a", "B"]);
    }

    #[test]
    fn test_reordering_input_reorders_output() {
        let a = SidebarEntry::leaf("A", "/a");
        let b = SidebarEntry::leaf("B", "/b");

        let forward = build(&[a.clone(), b.clone()]).unwrap();
        let reversed = build(&[b, a]).unwrap();

        let forward_labels: Vec<&str> = iter(&forward).map(NavNode::label).collect();
        let reversed_labels: Vec<&str> = iter(&reversed).map(NavNode::label).collect();
        assert_eq!(forward_labels, vec!["A", "B"]);
        assert_eq!(reversed_labels, vec!["B", "A"]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let entries = vec![getting_started(), gcp_provider()];
        let first = build(&entries).unwrap();
        let second = build(&entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_routes_preorder_with_linked_group() {
        let entries = vec![SidebarEntry {
            text: "GCP".to_owned(),
            link: Some("/infrastructure/providers/gcp/".to_owned()),
            items: vec![SidebarEntry::leaf(
                "Account Setup",
                "/infrastructure/providers/gcp/account-setup",
            )],
        }];
        let nodes = build(&entries).unwrap();
        let table = routes(&nodes);
        assert_eq!(
            table,
            vec![
                Route {
                    label: "GCP".to_owned(),
                    link: "/infrastructure/providers/gcp/".to_owned(),
                },
                Route {
                    label: "Account Setup".to_owned(),
                    link: "/infrastructure/providers/gcp/account-setup".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_routes_skip_pure_groups() {
        let nodes = build(&[getting_started()]).unwrap();
        let table = routes(&nodes);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].link, "/getting-started/quick-start");
        assert_eq!(table[1].link, "/getting-started/prerequisites");
    }

    #[test]
    fn test_serialization_shape() {
        let nodes = build(&[getting_started()]).unwrap();
        let json = serde_json::to_value(&nodes).unwrap();

        assert_eq!(json[0]["label"], "Getting Started");
        // Pure groups serialize without a link field
        assert!(json[0].get("link").is_none());
        assert_eq!(json[0]["children"][0]["label"], "Quick Start");
        assert_eq!(json[0]["children"][0]["link"], "/getting-started/quick-start");
        // Leaves serialize without a children field
        assert!(json[0]["children"][0].get("children").is_none());
    }
}
