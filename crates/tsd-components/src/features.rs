//! Feature grid: the six-card product feature list.

use std::fmt::Write;

use crate::html::escape;
use crate::icons;

/// Icon shown on a feature card.
///
/// Some cards show a single mark, others a small row of logos; rendering
/// composes the SVG constants accordingly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    /// AI sparkle mark.
    AiSparkle,
    /// GCP / AWS / Azure marks in a row.
    CloudProviders,
    /// OSI keyhole mark.
    OpenSource,
    /// SOC 2 / ISO 27001 / GDPR marks in a row.
    Compliance,
    /// Shield-with-lock mark.
    Auth,
    /// Prometheus / Grafana / Jaeger / monitor marks in a row.
    Observability,
}

impl Icon {
    /// Render the icon to an HTML fragment.
    #[must_use]
    pub fn render(self) -> String {
        match self {
            Self::AiSparkle => icons::SVG_AI_SPARKLE.to_owned(),
            Self::CloudProviders => icon_row(&[
                icons::SVG_GCP_MARK,
                icons::SVG_AWS_MARK,
                icons::SVG_AZURE_MARK,
            ]),
            Self::OpenSource => icons::SVG_OSI.to_owned(),
            Self::Compliance => icon_row(&[icons::SVG_SOC2, icons::SVG_ISO27001, &icons::gdpr_icon()]),
            Self::Auth => icons::SVG_AUTH_SHIELD.to_owned(),
            Self::Observability => icon_row(&[
                icons::SVG_PROMETHEUS,
                icons::SVG_GRAFANA,
                icons::SVG_JAEGER,
                icons::SVG_MONITOR,
            ]),
        }
    }
}

/// Wrap several marks in a horizontal row.
fn icon_row(marks: &[&str]) -> String {
    let mut html = String::with_capacity(marks.iter().map(|m| m.len()).sum::<usize>() + 32);
    html.push_str(r#"<div class="icon-row">"#);
    for mark in marks {
        html.push_str(mark);
    }
    html.push_str("</div>");
    html
}

/// One feature card: icon, title, and details text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Card icon.
    pub icon: Icon,
    /// Card title.
    pub title: &'static str,
    /// Card body text.
    pub details: &'static str,
}

/// The product feature list, in display order.
pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::AiSparkle,
        title: "Built for AI agents",
        details: "MCP server included. Claude Code, Cursor, VS Code Copilot manage your stack — deploy, query, debug with 31 tools.",
    },
    Feature {
        icon: Icon::CloudProviders,
        title: "Multi-cloud infrastructure",
        details: "GCP, AWS, Azure. Same framework, generated Terraform, CI/CD pipelines.",
    },
    Feature {
        icon: Icon::OpenSource,
        title: "Free & open source",
        details: "Bring your own cloud account. No vendor lock-in, no platform fees. You only pay your cloud provider.",
    },
    Feature {
        icon: Icon::Compliance,
        title: "Audit-ready infrastructure",
        details: "SOC 2, ISO 27001, GDPR technical controls built in. Encryption, network isolation, zero-credential runtimes, environment separation.",
    },
    Feature {
        icon: Icon::Auth,
        title: "Authentication built in",
        details: "JWT token management, protected routes, session handling. Or bring your own OIDC.",
    },
    Feature {
        icon: Icon::Observability,
        title: "Observability from day one",
        details: "Prometheus metrics, Grafana dashboards, distributed tracing with Jaeger.",
    },
];

/// Render the feature grid.
///
/// Cards appear in exactly the order of [`FEATURES`].
#[must_use]
pub fn feature_grid() -> String {
    render_features(&FEATURES)
}

/// Render a grid from an explicit feature list (order-preserving).
#[must_use]
pub fn render_features(features: &[Feature]) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div class="feature-grid">"#);
    for feature in features {
        let _ = write!(
            html,
            r#"<div class="feature-card"><div class="feature-icon">{icon}</div><h3>{title}</h3><p>{details}</p></div>"#,
            icon = feature.icon.render(),
            title = escape(feature.title),
            details = escape(feature.details),
        );
    }
    html.push_str("</div>");
    html
}
