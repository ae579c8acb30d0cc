//! Static homepage content components for the tsdevstack docs.
//!
//! Each component is a pure function from no input (or a small static list)
//! to an HTML fragment. No I/O, no state reads, no runtime failure path:
//! the markup is fixed and renders identically on every invocation.
//!
//! Components:
//! - [`hero`]: hero banner with beta badge and call-to-action links
//! - [`feature_grid`]: the six-entry [`FEATURES`] grid, order-preserving
//! - [`cloud_providers`]: GCP / AWS / Azure logo strip
//! - [`local_architecture_diagram`] / [`cloud_architecture_diagram`]:
//!   literal pre-formatted ASCII diagrams
//! - [`prerequisites`]: static prerequisites box
//!
//! Styling is class-based; the hosting framework supplies the theme.

mod diagrams;
mod features;
mod hero;
mod html;
mod icons;
mod prerequisites;
mod providers;

pub use diagrams::{cloud_architecture_diagram, local_architecture_diagram};
pub use features::{FEATURES, Feature, Icon, feature_grid, render_features};
pub use hero::hero;
pub use html::escape;
pub use prerequisites::prerequisites;
pub use providers::cloud_providers;
