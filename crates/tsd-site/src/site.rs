//! Site: descriptor plus validated navigation tree.

use std::path::Path;

use tsd_config::{ConfigError, Descriptor};
use tsd_content::{ContentIndex, UnresolvedLink};
use tsd_nav::{NavError, NavNode, Route};

/// Error building a [`Site`].
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Descriptor loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Navigation tree validation failed.
    #[error(transparent)]
    Nav(#[from] NavError),
}

/// Composed site: descriptor, navigation tree, and routing table.
///
/// Built once from a descriptor; configuration errors are fatal at build
/// time. After construction the site is immutable and may be read
/// concurrently by rendering workers without synchronization.
#[derive(Debug)]
pub struct Site {
    descriptor: Descriptor,
    navigation: Vec<NavNode>,
    routes: Vec<Route>,
}

impl Site {
    /// Build a site from a descriptor.
    ///
    /// Validates the descriptor fields and the sidebar structure; fails
    /// fast with an error naming the offending field or node path.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] for descriptor field errors and
    /// [`SiteError::Nav`] for sidebar structure errors.
    pub fn new(descriptor: Descriptor) -> Result<Self, SiteError> {
        descriptor.validate()?;
        let navigation = tsd_nav::build(&descriptor.sidebar)?;
        let routes = tsd_nav::routes(&navigation);
        tracing::debug!(
            sections = navigation.len(),
            routes = routes.len(),
            "built site navigation"
        );
        Ok(Self {
            descriptor,
            navigation,
            routes,
        })
    }

    /// Build the site from the builtin tsdevstack descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded descriptor is broken; covered by
    /// tests.
    pub fn builtin() -> Result<Self, SiteError> {
        Self::new(Descriptor::builtin()?)
    }

    /// Load a descriptor (explicit path or discovery) and build the site.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, parsing, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, SiteError> {
        Self::new(Descriptor::load(path)?)
    }

    /// Site descriptor (title, description, icon, social links, footer).
    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Root sequence of navigation nodes, in authored order.
    #[must_use]
    pub fn navigation(&self) -> &[NavNode] {
        &self.navigation
    }

    /// Flat routing table of every linked node, in pre-order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Navigation tree serialized for the hosting framework.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn navigation_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.navigation)
    }

    /// Check every sidebar link against a content index.
    ///
    /// Unresolved links are build-time warnings, not errors; callers that
    /// want a hard failure can assert the result is empty.
    #[must_use]
    pub fn check_links(&self, index: &ContentIndex) -> Vec<UnresolvedLink> {
        tsd_content::check_links(&self.navigation, index)
    }
}
