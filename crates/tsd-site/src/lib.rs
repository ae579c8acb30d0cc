//! Site composition and homepage rendering for the tsdevstack docs.
//!
//! This crate provides:
//! - [`Site`]: descriptor plus validated navigation tree, built once and
//!   immutable for the process lifetime
//! - [`render_homepage`]: slots the content components into the designated
//!   homepage regions
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), tsd_site::SiteError> {
//! use tsd_site::Site;
//!
//! let site = Site::builtin()?;
//!
//! // Sidebar tree and routing table for the host
//! let nav = site.navigation();
//! let routes = site.routes();
//!
//! // Homepage HTML fragment
//! let html = tsd_site::render_homepage();
//! # Ok(())
//! # }
//! ```

mod homepage;
mod site;

pub use homepage::render_homepage;
pub use site::{Site, SiteError};
