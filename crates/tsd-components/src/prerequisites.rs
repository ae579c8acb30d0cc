//! Prerequisites box shown on getting-started pages.

/// Render the prerequisites box.
///
/// The detail link targets the `/getting-started/prerequisites` sidebar
/// leaf.
#[must_use]
pub fn prerequisites() -> String {
    concat!(
        r#"<div class="prerequisites-box">"#,
        "<p><strong>Prerequisites:</strong></p>",
        "<ul>",
        "<li>Node.js 20+</li>",
        "<li>Docker Desktop</li>",
        "<li>Terraform (for cloud deployment)</li>",
        "</ul>",
        r#"<p>See <a href="/getting-started/prerequisites">Prerequisites</a> for detailed setup.</p>"#,
        "</div>",
    )
    .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerequisites_items_in_order() {
        let html = prerequisites();
        let node = html.find("Node.js 20+").unwrap();
        let docker = html.find("Docker Desktop").unwrap();
        let terraform = html.find("Terraform").unwrap();
        assert!(node < docker && docker < terraform);
    }

    #[test]
    fn test_prerequisites_detail_link() {
        assert!(prerequisites().contains(r#"href="/getting-started/prerequisites""#));
    }
}
