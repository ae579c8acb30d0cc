//! Content document index and sidebar link checking.
//!
//! The hosting framework resolves every sidebar `link` against a markdown
//! content tree. This crate ships the build-time side of that contract:
//! [`ContentIndex`] scans the content directory and records which URL paths
//! have a backing document, and [`check_links`] reports sidebar links that
//! resolve to nothing.
//!
//! # URL Path Convention
//!
//! Links are absolute site paths:
//! - `guide.md` -> `/guide`
//! - `guide/index.md` -> `/guide` (also reachable as `/guide/`)
//! - `index.md` -> `/`
//!
//! Unresolved links are warnings, not errors: the caller decides whether to
//! fail the build.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tsd_nav::NavNode;

/// Index of resolvable content document paths.
///
/// Built once by scanning the content source directory. A missing source
/// directory yields an empty index.
#[derive(Debug, Default)]
pub struct ContentIndex {
    paths: HashSet<String>,
}

impl ContentIndex {
    /// Scan a content directory for markdown documents.
    ///
    /// Walks the tree recursively, skipping hidden files and directories.
    /// `index.md` files register their directory path; other `.md` files
    /// register their stem path.
    #[must_use]
    pub fn scan(source_dir: &Path) -> Self {
        let mut paths = HashSet::new();
        if source_dir.exists() {
            scan_directory(source_dir, "", &mut paths);
        }
        tracing::debug!(documents = paths.len(), "scanned content directory");
        Self { paths }
    }

    /// Build an index from known URL paths (for hosts with non-filesystem
    /// content sources).
    #[must_use]
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(|p| normalize(&p.into())).collect(),
        }
    }

    /// True if `link` resolves to a content document.
    ///
    /// Tolerates the trailing-slash index form used by provider Overview
    /// pages: `/infrastructure/providers/gcp/` resolves to
    /// `infrastructure/providers/gcp/index.md`.
    #[must_use]
    pub fn resolves(&self, link: &str) -> bool {
        self.paths.contains(&normalize(link))
    }

    /// Number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True if no documents were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Normalize a link for lookup: strip fragments and the trailing slash.
fn normalize(link: &str) -> String {
    let link = link.split('#').next().unwrap_or(link);
    if link.len() > 1 {
        link.trim_end_matches('/').to_owned()
    } else {
        link.to_owned()
    }
}

/// Scan one directory level and recurse into subdirectories.
fn scan_directory(dir_path: &Path, url_prefix: &str, paths: &mut HashSet<String>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            let child_url = format!("{url_prefix}/{name}");
            scan_directory(&path, &child_url, paths);
        } else if path.extension().is_some_and(|e| e == "md") {
            if name.to_lowercase() == "index.md" {
                let url = if url_prefix.is_empty() { "/" } else { url_prefix };
                paths.insert(url.to_owned());
            } else if let Some(stem) = path.file_stem() {
                paths.insert(format!("{url_prefix}/{}", stem.to_string_lossy()));
            }
        }
    }
}

/// A sidebar link with no backing content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedLink {
    /// Display text of the node carrying the link.
    pub label: String,
    /// The link that resolved to nothing.
    pub link: String,
}

/// Check every linked navigation node against the content index.
///
/// Returns unresolved links in pre-order. Each one is also logged as a
/// warning so build output surfaces broken paths without failing.
#[must_use]
pub fn check_links(nodes: &[NavNode], index: &ContentIndex) -> Vec<UnresolvedLink> {
    let mut unresolved = Vec::new();
    for node in tsd_nav::iter(nodes) {
        if let Some(link) = node.link()
            && !index.resolves(link)
        {
            tracing::warn!(label = node.label(), link, "sidebar link has no content document");
            unresolved.push(UnresolvedLink {
                label: node.label().to_owned(),
                link: link.to_owned(),
            });
        }
    }
    unresolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tsd_config::SidebarEntry;

    fn write_file(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "# page\n").unwrap();
    }

    #[test]
    fn test_scan_maps_files_to_url_paths() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "index.md");
        write_file(dir.path(), "guide.md");
        write_file(dir.path(), "infrastructure/providers/gcp/index.md");
        write_file(dir.path(), "infrastructure/providers/gcp/cicd.md");

        let index = ContentIndex::scan(dir.path());
        assert_eq!(index.len(), 4);
        assert!(index.resolves("/"));
        assert!(index.resolves("/guide"));
        assert!(index.resolves("/infrastructure/providers/gcp/cicd"));
    }

    #[test]
    fn test_trailing_slash_resolves_to_index() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "infrastructure/providers/gcp/index.md");

        let index = ContentIndex::scan(dir.path());
        assert!(index.resolves("/infrastructure/providers/gcp/"));
        assert!(index.resolves("/infrastructure/providers/gcp"));
    }

    #[test]
    fn test_scan_skips_hidden_and_non_markdown() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), ".hidden/page.md");
        write_file(dir.path(), "notes.txt");
        write_file(dir.path(), "guide.md");

        let index = ContentIndex::scan(dir.path());
        assert_eq!(index.len(), 1);
        assert!(index.resolves("/guide"));
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let index = ContentIndex::scan(Path::new("/nonexistent/content"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_resolves_ignores_fragment() {
        let index = ContentIndex::from_paths(["/guide"]);
        assert!(index.resolves("/guide#setup"));
    }

    #[test]
    fn test_check_links_reports_unresolved_in_preorder() {
        let entries = vec![SidebarEntry::group(
            "Getting Started",
            vec![
                SidebarEntry::leaf("Quick Start", "/getting-started/quick-start"),
                SidebarEntry::leaf("Prerequisites", "/getting-started/prerequisites"),
            ],
        )];
        let nodes = tsd_nav::build(&entries).unwrap();
        let index = ContentIndex::from_paths(["/getting-started/quick-start"]);

        let unresolved = check_links(&nodes, &index);
        assert_eq!(
            unresolved,
            vec![UnresolvedLink {
                label: "Prerequisites".to_owned(),
                link: "/getting-started/prerequisites".to_owned(),
            }]
        );
    }

    #[test]
    fn test_check_links_covers_group_links() {
        let entries = vec![SidebarEntry {
            text: "GCP".to_owned(),
            link: Some("/infrastructure/providers/gcp/".to_owned()),
            items: vec![SidebarEntry::leaf(
                "Account Setup",
                "/infrastructure/providers/gcp/account-setup",
            )],
        }];
        let nodes = tsd_nav::build(&entries).unwrap();
        let index = ContentIndex::from_paths(["/infrastructure/providers/gcp/account-setup"]);

        let unresolved = check_links(&nodes, &index);
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].label, "GCP");
    }

    #[test]
    fn test_check_links_all_resolved() {
        let entries = vec![SidebarEntry::leaf("Guide", "/guide")];
        let nodes = tsd_nav::build(&entries).unwrap();
        let index = ContentIndex::from_paths(["/guide"]);
        assert!(check_links(&nodes, &index).is_empty());
    }
}
