//! Inline SVG marks used by the feature grid and provider strip.
//!
//! Brand marks carry their official hex colors; neutral strokes use
//! `currentColor` so the host theme applies.

use std::fmt::Write;

// Small feature-card marks

pub(crate) const SVG_GCP_MARK: &str = r##"<svg width="24" height="20" viewBox="0 0 24 20" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M13.1 4.5l1.5-1.5.1-.6C12.5.4 9.5-.5 6.8.3 4.1 1.1 2 3.2 1.2 5.9l.5-.1 3-0.5.2-.2c1.3-1.4 3.3-2 5.2-1.5l.2.1 2.8-.2z" fill="#EA4335"/><path d="M17.6 5.9c-.5-1.8-1.6-3.4-3.1-4.5l-2.7 2.7c1.2.9 1.9 2.3 1.9 3.8v.5c1.4 0 2.5 1.1 2.5 2.5s-1.1 2.5-2.5 2.5H8.7l-.5.5v3l.5.5h5c3.1 0 5.6-2.4 5.7-5.5.1-2-.9-3.9-2.5-5l.7-1z" fill="#4285F4"/><path d="M3.7 14.9h5v-3h-5c-.4 0-.7-.1-1-.2l-.7.2-2 2-.2.6c1.1.9 2.5 1.4 3.9 1.4z" fill="#34A853"/><path d="M3.7 3.9C.6 3.9-1.9 6.5-2 9.6c0 1.9.9 3.6 2.4 4.7l2.9-2.9c-1-.5-1.4-1.6-1-2.6.5-1 1.6-1.4 2.6-1 .4.2.8.5 1 1l2.9-2.9C7.5 4.7 5.6 3.9 3.7 3.9z" fill="#FBBC05"/></svg>"##;

pub(crate) const SVG_AWS_MARK: &str = r##"<svg width="30" height="20" viewBox="0 0 30 20" fill="none" xmlns="http://www.w3.org/2000/svg"><text x="0" y="13" font-family="system-ui, -apple-system, sans-serif" font-size="12" font-weight="700" letter-spacing="-0.5" fill="#FF9900">AWS</text><path d="M2 17c7-3 15-3.2 24-1" stroke="#FF9900" stroke-width="1.5" stroke-linecap="round" fill="none"/><path d="M23 13.5l3.5 2.5-5 .5" fill="#FF9900"/></svg>"##;

pub(crate) const SVG_AZURE_MARK: &str = r##"<svg width="20" height="20" viewBox="0 0 20 20" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M7.5 1L1.5 16h3.7L7.5 1z" fill="#0078D4"/><path d="M7.5 1l6.5 13-10 3.5H18L7.5 1z" fill="#0078D4" opacity="0.8"/><path d="M1.5 16l6.5-2-4.5-5L1.5 16z" fill="#0078D4" opacity="0.6"/></svg>"##;

// OSI keyhole logo: circle with keyhole cutout
pub(crate) const SVG_OSI: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="11" fill="#3DA639"/><circle cx="12" cy="9" r="3.5" fill="white"/><path d="M9.5 11l-2 9h9l-2-9z" fill="white"/></svg>"##;

// SOC 2: AICPA shield
pub(crate) const SVG_SOC2: &str = r##"<svg width="20" height="24" viewBox="0 0 20 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M10 0L0 4v8c0 6.6 4.3 11.2 10 12 5.7-.8 10-5.4 10-12V4L10 0z" fill="#1A3E72"/><text x="10" y="14" font-family="system-ui, -apple-system, sans-serif" font-size="6" font-weight="700" fill="white" text-anchor="middle">SOC</text><text x="10" y="20" font-family="system-ui, -apple-system, sans-serif" font-size="5" font-weight="600" fill="white" text-anchor="middle">2</text></svg>"##;

// ISO 27001: globe with meridians
pub(crate) const SVG_ISO27001: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="10.5" stroke="#00529B" stroke-width="1.5" fill="none"/><ellipse cx="12" cy="12" rx="5" ry="10.5" stroke="#00529B" stroke-width="1" fill="none"/><line x1="1.5" y1="8" x2="22.5" y2="8" stroke="#00529B" stroke-width="1"/><line x1="1.5" y1="16" x2="22.5" y2="16" stroke="#00529B" stroke-width="1"/><line x1="12" y1="1.5" x2="12" y2="22.5" stroke="#00529B" stroke-width="1"/></svg>"##;

// Prometheus: fire/torch
pub(crate) const SVG_PROMETHEUS: &str = r##"<svg width="20" height="22" viewBox="0 0 20 22" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M10 0C10 0 6 4 6 8c0 2.2 1.8 4 4 4s4-1.8 4-4C14 4 10 0 10 0z" fill="#E6522C"/><path d="M10 5c0 0-2 2-2 4 0 1.1.9 2 2 2s2-.9 2-2c0-2-2-4-2-4z" fill="#F8B886"/><rect x="4" y="14" width="12" height="2" rx="1" fill="#E6522C"/><rect x="5" y="17" width="10" height="2" rx="1" fill="#E6522C"/><rect x="6" y="20" width="8" height="1.5" rx="0.75" fill="#E6522C"/></svg>"##;

// Grafana: dashboard/eye
pub(crate) const SVG_GRAFANA: &str = r##"<svg width="22" height="22" viewBox="0 0 22 22" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="11" cy="11" r="10" stroke="#F46800" stroke-width="1.5" fill="none"/><circle cx="11" cy="11" r="4" fill="#F46800"/><circle cx="11" cy="11" r="1.5" fill="#FFC266"/><line x1="11" y1="1" x2="11" y2="4" stroke="#F46800" stroke-width="1.5"/><line x1="11" y1="18" x2="11" y2="21" stroke="#F46800" stroke-width="1.5"/><line x1="1" y1="11" x2="4" y2="11" stroke="#F46800" stroke-width="1.5"/><line x1="18" y1="11" x2="21" y2="11" stroke="#F46800" stroke-width="1.5"/></svg>"##;

// Jaeger: trace spans
pub(crate) const SVG_JAEGER: &str = r##"<svg width="22" height="22" viewBox="0 0 22 22" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="3" cy="6" r="2.5" fill="#60D0E4"/><circle cx="11" cy="11" r="2.5" fill="#60D0E4"/><circle cx="19" cy="16" r="2.5" fill="#60D0E4"/><line x1="5" y1="7" x2="9" y2="10" stroke="#60D0E4" stroke-width="1.5"/><line x1="13" y1="12" x2="17" y2="15" stroke="#60D0E4" stroke-width="1.5"/></svg>"##;

// Monitor: screen with metric line
pub(crate) const SVG_MONITOR: &str = r##"<svg width="22" height="22" viewBox="0 0 22 22" fill="none" xmlns="http://www.w3.org/2000/svg"><rect x="1" y="2" width="20" height="14" rx="2" stroke="currentColor" stroke-width="1.5" fill="none"/><polyline points="4,12 8,8 11,10 14,6 18,9" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" fill="none"/><line x1="8" y1="19" x2="14" y2="19" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/><line x1="11" y1="16" x2="11" y2="19" stroke="currentColor" stroke-width="1.5"/></svg>"##;

// Shield with lock
pub(crate) const SVG_AUTH_SHIELD: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M12 1L3 5v6c0 5.5 3.8 10.7 9 12 5.2-1.3 9-6.5 9-12V5L12 1z" stroke="currentColor" stroke-width="1.5" fill="none"/><rect x="9" y="10" width="6" height="5" rx="1" fill="currentColor"/><circle cx="12" cy="8.5" r="2.5" stroke="currentColor" stroke-width="1.5" fill="none"/></svg>"##;

// AI sparkle: large 4-pointed star with two satellites
pub(crate) const SVG_AI_SPARKLE: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M12 1l2 7.5L21.5 10l-7.5 2L12 19.5 10 12 2.5 10l7.5-2L12 1z" fill="currentColor"/><path d="M19.5 2l.75 2.25L22.5 5l-2.25.75L19.5 8l-.75-2.25L16.5 5l2.25-.75L19.5 2z" fill="currentColor" opacity="0.5"/><path d="M5 17l.5 1.5L7 19l-1.5.5L5 21l-.5-1.5L3 19l1.5-.5L5 17z" fill="currentColor" opacity="0.35"/></svg>"##;

// Full-size provider strip logos (mark plus wordmark)

pub(crate) const SVG_GCP_LOGO: &str = r##"<svg width="140" height="22" viewBox="0 0 140 22" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M13.1 6.5l1.5-1.5.1-.6C12.5 2.4 9.5 1.5 6.8 2.3 4.1 3.1 2 5.2 1.2 7.9l.5-.1 3-0.5.2-.2c1.3-1.4 3.3-2 5.2-1.5l.2.1 2.8-0.2z" fill="#EA4335"/><path d="M17.6 7.9c-.5-1.8-1.6-3.4-3.1-4.5l-2.7 2.7c1.2.9 1.9 2.3 1.9 3.8v.5c1.4 0 2.5 1.1 2.5 2.5s-1.1 2.5-2.5 2.5H8.7l-.5.5v3l.5.5h5c3.1 0 5.6-2.4 5.7-5.5.1-2-.9-3.9-2.5-5l.7-1z" fill="#4285F4"/><path d="M3.7 16.9h5v-3h-5c-.4 0-.7-.1-1-.2l-.7.2-2 2-.2.6c1.1.9 2.5 1.4 3.9 1.4z" fill="#34A853"/><path d="M3.7 5.9C.6 5.9-1.9 8.5-2 11.6c0 1.9.9 3.6 2.4 4.7l2.9-2.9c-1-.5-1.4-1.6-1-2.6.5-1 1.6-1.4 2.6-1 .4.2.8.5 1 1l2.9-2.9C7.5 6.7 5.6 5.9 3.7 5.9z" fill="#FBBC05"/><text x="24" y="15.5" font-family="system-ui, -apple-system, sans-serif" font-size="13" font-weight="500" fill="currentColor">Google Cloud</text></svg>"##;

pub(crate) const SVG_AWS_LOGO: &str = r##"<svg width="52" height="22" viewBox="0 0 52 22" fill="none" xmlns="http://www.w3.org/2000/svg"><text x="0" y="15" font-family="system-ui, -apple-system, sans-serif" font-size="15" font-weight="700" letter-spacing="-0.5" fill="#FF9900">AWS</text><path d="M3 19c13-4 26-4.5 42-1.5" stroke="#FF9900" stroke-width="1.8" stroke-linecap="round" fill="none"/><path d="M40 14.5l5.5 3.5-8 1" fill="#FF9900"/></svg>"##;

pub(crate) const SVG_AZURE_LOGO: &str = r##"<svg width="100" height="22" viewBox="0 0 100 22" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M10.2 2L4 17.7h4.1L10.2 2z" fill="#0078D4"/><path d="M10.2 2l6.5 13.7L5.5 19.5h15.3L10.2 2z" fill="#0078D4" opacity="0.8"/><path d="M4 17.7l7.2-2.1-5.1-5.8L4 17.7z" fill="#0078D4" opacity="0.6"/><text x="25" y="15.5" font-family="system-ui, -apple-system, sans-serif" font-size="13" font-weight="500" fill="currentColor">Azure</text></svg>"##;

/// GDPR mark: EU circle of twelve stars.
///
/// Star positions are computed rather than hand-authored; output is
/// deterministic (fixed two-decimal formatting).
pub(crate) fn gdpr_icon() -> String {
    let mut svg = String::with_capacity(2048);
    svg.push_str(
        r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="11" fill="#003399"/>"##,
    );
    for step in 0..12_u32 {
        let rad = f64::from(step * 30).to_radians();
        let x = 12.0 + 8.0 * rad.sin();
        let y = 12.0 - 8.0 * rad.cos();
        let _ = write!(
            svg,
            r##"<polygon points="{}" fill="#FFCC00"/>"##,
            star_points(x, y)
        );
    }
    svg.push_str("</svg>");
    svg
}

/// Five-pointed star outline as offsets from its center.
const STAR_OFFSETS: [(f64, f64); 10] = [
    (0.0, -1.5),
    (0.6, -0.5),
    (1.5, -0.5),
    (0.8, 0.2),
    (1.0, 1.3),
    (0.0, 0.7),
    (-1.0, 1.3),
    (-0.8, 0.2),
    (-1.5, -0.5),
    (-0.6, -0.5),
];

fn star_points(x: f64, y: f64) -> String {
    let mut points = String::with_capacity(120);
    for (i, (dx, dy)) in STAR_OFFSETS.iter().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        let _ = write!(points, "{:.2},{:.2}", x + dx, y + dy);
    }
    points
}
