//! Homepage assembly: slot content components into page regions.

use tsd_components::{
    cloud_architecture_diagram, cloud_providers, feature_grid, hero,
    local_architecture_diagram, prerequisites,
};

/// Render the homepage fragment.
///
/// Slots the content components into the designated regions, in fixed
/// order: hero, provider strip, feature grid, local architecture, cloud
/// architecture, prerequisites. The host wraps the fragment in its page
/// chrome (header, sidebar, footer).
#[must_use]
pub fn render_homepage() -> String {
    let regions = [
        hero(),
        cloud_providers(),
        feature_grid(),
        section("Local development", &local_architecture_diagram()),
        section("Cloud deployment", &cloud_architecture_diagram()),
        prerequisites(),
    ];

    let mut html = String::with_capacity(regions.iter().map(String::len).sum::<usize>() + 64);
    html.push_str(r#"<main class="home">"#);
    for region in &regions {
        html.push_str(region);
    }
    html.push_str("</main>");
    html
}

/// Wrap a diagram in a titled homepage section.
fn section(title: &str, body: &str) -> String {
    format!(r#"<section class="home-section"><h2>{title}</h2>{body}</section>"#)
}
