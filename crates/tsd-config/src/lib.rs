//! Site descriptor loading for the tsdevstack docs homepage.
//!
//! Parses `home.toml` descriptor files with serde and provides
//! auto-discovery of descriptor files in parent directories.
//!
//! The descriptor is the single configuration surface consumed by the
//! hosting documentation framework: site metadata (`title`, `description`,
//! `icon`), social links, a footer message, and the nested `sidebar` tree.
//!
//! A builtin descriptor ([`Descriptor::builtin`]) ships the complete
//! tsdevstack sidebar. Its link paths are the public routing surface and
//! must stay stable.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Descriptor filename to search for.
const DESCRIPTOR_FILENAME: &str = "home.toml";

/// Builtin descriptor shipped with the crate.
const BUILTIN_DESCRIPTOR: &str = include_str!("../home.toml");

/// Site descriptor.
///
/// Deserialized from `home.toml`. All sections have defaults so a minimal
/// descriptor only needs a `title`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Descriptor {
    /// Site title.
    pub title: String,
    /// Site description (used for meta tags by the host).
    pub description: String,
    /// Site icon path (absolute site path or full URL).
    pub icon: String,
    /// Social links shown in the site header.
    pub social: Vec<SocialLink>,
    /// Footer configuration.
    pub footer: FooterConfig,
    /// Sidebar tree (authored order is display order).
    pub sidebar: Vec<SidebarEntry>,
}

impl Default for Descriptor {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            icon: "/favicon.svg".to_owned(),
            social: Vec::new(),
            footer: FooterConfig::default(),
            sidebar: Vec::new(),
        }
    }
}

/// Social link entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    /// Platform identifier (e.g., "github").
    pub platform: String,
    /// Full URL to the profile or repository.
    pub url: String,
}

/// Footer configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer message.
    pub message: String,
}

/// One hand-authored sidebar entry.
///
/// Field names follow the rspress sidebar convention (`text`, `link`,
/// `items`) so a descriptor maps directly onto the hosting framework.
/// Structural validation (empty labels, duplicate siblings, entries with
/// neither link nor items) happens when the navigation tree is built,
/// not at parse time.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Display text.
    pub text: String,
    /// Optional link target (absent for pure group headers).
    #[serde(default)]
    pub link: Option<String>,
    /// Nested entries (empty for leaves).
    #[serde(default)]
    pub items: Vec<SidebarEntry>,
}

impl SidebarEntry {
    /// Create a leaf entry.
    #[must_use]
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            items: Vec::new(),
        }
    }

    /// Create a group entry without a link of its own.
    #[must_use]
    pub fn group(text: impl Into<String>, items: Vec<SidebarEntry>) -> Self {
        Self {
            text: text.into(),
            link: None,
            items,
        }
    }
}

/// Descriptor error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Descriptor file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Descriptor error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a path field to be an absolute site path or a full URL.
fn require_site_path(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://") {
        return Ok(());
    }
    Err(ConfigError::Validation(format!(
        "{field} must start with /, http:// or https://"
    )))
}

impl Descriptor {
    /// Load a descriptor.
    ///
    /// If `path` is provided, loads from that file. Otherwise searches for
    /// `home.toml` in the current directory and parents, falling back to the
    /// builtin descriptor when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        match Self::discover() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Self::builtin(),
        }
    }

    /// Parse the builtin tsdevstack descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded descriptor fails to parse or
    /// validate; covered by tests, so this only fails on a broken build.
    pub fn builtin() -> Result<Self, ConfigError> {
        let descriptor: Self = toml::from_str(BUILTIN_DESCRIPTOR)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Search for a descriptor file in the current directory and parents.
    #[must_use]
    pub fn discover() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(DESCRIPTOR_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load a descriptor from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let descriptor: Self = toml::from_str(&content)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Validate descriptor field values.
    ///
    /// Checks site metadata fields only. Sidebar structure is validated by
    /// the navigation tree builder, which reports offending node paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_site_path(&self.icon, "icon")?;
        for (i, social) in self.social.iter().enumerate() {
            require_non_empty(&social.platform, &format!("social[{i}].platform"))?;
            require_http_url(&social.url, &format!("social[{i}].url"))?;
        }
        Ok(())
    }
}
