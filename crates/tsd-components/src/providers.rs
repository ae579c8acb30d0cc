//! Cloud provider logo strip.

use crate::icons;

/// Render the provider logo strip: GCP, AWS, and Azure wordmarks with a
/// caption line.
#[must_use]
pub fn cloud_providers() -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="cloud-providers"><div class="provider-logos">"#);
    html.push_str(icons::SVG_GCP_LOGO);
    html.push_str(icons::SVG_AWS_LOGO);
    html.push_str(icons::SVG_AZURE_LOGO);
    html.push_str("</div><p>Deploy to any major cloud provider</p></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_logos_in_order() {
        let html = cloud_providers();
        let gcp = html.find("Google Cloud").unwrap();
        let aws = html.find("AWS").unwrap();
        let azure = html.find("Azure").unwrap();
        assert!(gcp < aws && aws < azure);
    }

    #[test]
    fn test_caption_present() {
        assert!(cloud_providers().contains("Deploy to any major cloud provider"));
    }
}
