//! Hero banner for the documentation homepage.

/// Render the hero banner.
///
/// Fixed copy: beta badge, gradient product title, tagline, subtitle, and
/// two call-to-action links. The "Why tsdevstack?" link targets a sidebar
/// leaf and must stay in sync with the navigation descriptor.
#[must_use]
pub fn hero() -> String {
    concat!(
        r#"<div class="home-hero">"#,
        r#"<span class="hero-badge">Currently in Beta</span>"#,
        r#"<h1 class="hero-title">tsdevstack</h1>"#,
        r#"<p class="hero-tagline">Full-stack, cloud-native TypeScript microservices</p>"#,
        r#"<p class="hero-subtitle">From zero to production in an hour, not months</p>"#,
        r#"<div class="hero-actions">"#,
        r#"<a class="hero-action-primary" href="mailto:hello@tsdevstack.dev?subject=Early access request">Request Early Access</a>"#,
        r#"<a class="hero-action-secondary" href="/introduction/what-is-tsdevstack">Why tsdevstack?</a>"#,
        "</div>",
        "</div>",
    )
    .to_owned()
}
