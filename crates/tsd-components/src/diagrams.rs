//! Architecture diagrams: literal pre-formatted text blocks.
//!
//! The diagrams are opaque content; the host renders them verbatim inside
//! `<pre>` and parses nothing out of them.

use crate::html::escape;

/// Local development architecture (Docker Compose network).
const LOCAL_DIAGRAM: &str = r"┌─────────────────────────────────────────────────────────────┐
│  Docker Compose Network                                     │
│                                                             │
│    Browser ──► localhost:8000                               │
│                    │                                        │
│                    ▼                                        │
│              ┌──────────┐                                   │
│              │   Kong   │                                   │
│              └────┬─────┘                                   │
│                   │                                         │
│      ┌────────────┼────────────┐                            │
│      ▼            ▼            ▼                            │
│  ┌────────┐  ┌────────┐  ┌────────┐                         │
│  │  Auth  │  │ Offers │  │  BFF   │  (hot reload)           │
│  │ :3001  │  │ :3002  │  │ :3003  │                         │
│  └───┬────┘  └───┬────┘  └───┬────┘                         │
│      │           │           │                              │
│      └───────────┴───────────┘                              │
│                  │                                          │
│      ┌───────────┴───────────┐                              │
│      ▼                       ▼                              │
│  ┌────────┐             ┌────────┐                          │
│  │Postgres│             │ Redis  │                          │
│  │ :5432  │             │ :6379  │                          │
│  └────────┘             └────────┘                          │
│                                                             │
│  Observability:                                             │
│  Prometheus :9090 │ Grafana :4001 │ Jaeger :16686           │
└─────────────────────────────────────────────────────────────┘";

/// Cloud deployment architecture (load balancer, private network, managed
/// services).
const CLOUD_DIAGRAM: &str = r"                              Internet
                                  │
                                  ▼
                    ┌─────────────────────────────┐
                    │      Cloud Load Balancer    │
                    │    • TLS termination        │
                    │    • WAF rules              │
                    │    • Health checks          │
                    └─────────────┬───────────────┘
                                  │
        ┌─────────────────────────┼─────────────────────────┐
        │                         │                         │
        ▼                         ▼                         ▼
┌───────────────┐  ┌───────────────────────────────────────────────┐
│ CDN / Bucket  │  │              Private Network                  │
│(static assets)│  │                                               │
│               │  │  ┌─────────────────┐   ┌───────────────────┐  │
│ • SPA apps    │  │  │  Kong Gateway   │   │  Next.js Frontend │  │
│ • Edge cache  │  │  │  (api.*)        │   │  (example.com)    │  │
│               │  │  │  • JWT, CORS    │   │  • SSR container  │  │
└───────────────┘  │  └────────┬────────┘   └───────────────────┘  │
                   │           │                                   │
                   │     ┌─────┴─────────────────┐                 │
                   │     │           │           │                 │
                   │     ▼           ▼           ▼                 │
                   │  ┌───────┐ ┌─────────┐ ┌───────┐              │
                   │  │ Auth  │ │ Offers  │ │  BFF  │              │
                   │  │Service│ │ Service │ │       │              │
                   │  └───┬───┘ └────┬────┘ └───┬───┘              │
                   │      │          │          │                  │
                   │      ▼          ▼          ▼                  │
                   │  ┌───────────────────────────────────────┐    │
                   │  │          Managed PostgreSQL           │    │
                   │  │    • Private IP • Per-service DBs     │    │
                   │  └───────────────────────────────────────┘    │
                   │                                               │
                   │  ┌───────────────────────────────────────┐    │
                   │  │            Managed Redis              │    │
                   │  │    • Rate limiting • Sessions         │    │
                   │  └───────────────────────────────────────┘    │
                   │                                               │
                   │  ┌───────────────────────────────────────┐    │
                   │  │           Secret Manager              │    │
                   │  │    • JWT keys • DB credentials        │    │
                   │  └───────────────────────────────────────┘    │
                   │                                               │
                   └───────────────────────────────────────────────┘";

/// Render the local development architecture diagram.
#[must_use]
pub fn local_architecture_diagram() -> String {
    render_diagram(LOCAL_DIAGRAM)
}

/// Render the cloud deployment architecture diagram.
#[must_use]
pub fn cloud_architecture_diagram() -> String {
    render_diagram(CLOUD_DIAGRAM)
}

fn render_diagram(text: &str) -> String {
    format!(
        r#"<pre class="architecture-diagram">{}</pre>"#,
        escape(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_diagram_content() {
        let html = local_architecture_diagram();
        assert!(html.starts_with(r#"<pre class="architecture-diagram">"#));
        assert!(html.contains("Docker Compose Network"));
        assert!(html.contains("Prometheus :9090"));
    }

    #[test]
    fn test_cloud_diagram_content() {
        let html = cloud_architecture_diagram();
        assert!(html.contains("Cloud Load Balancer"));
        assert!(html.contains("Secret Manager"));
        assert!(html.ends_with("</pre>"));
    }

    #[test]
    fn test_diagrams_preserve_box_drawing() {
        // Opaque literal content: box-drawing characters survive rendering
        assert!(local_architecture_diagram().contains("└────────┘"));
        assert!(cloud_architecture_diagram().contains("• TLS termination"));
    }
}
