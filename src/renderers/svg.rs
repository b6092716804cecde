//! SVG renderer: draws one `FrameSnapshot` of the layer map.
//!
//! Everything in world space sits in one group transformed by the
//! viewport, so the same snapshot renders identically at any zoom.

use std::collections::HashMap;

use super::{Renderer, truncate_label};
use crate::config::{LayoutConfig, RenderConfig};
use crate::layout::Connector;
use crate::session::{FrameSnapshot, HubFrame, LeafFrame};

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "sans-serif";
const BACKGROUND: &str = "#0a0e1a";
const CARD_FILL: &str = "#0f1419";
const MUTED_TEXT: &str = "#94a3b8";
const DETAIL_TEXT: &str = "#cbd5e1";
const DOT_FILL: &str = "#334155";
const MINUS: char = '\u{2212}';

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn font(size: u32) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{size}""#)
}

// ── SvgRenderer ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    pub render: RenderConfig,
    pub layout: LayoutConfig,
}

impl SvgRenderer {
    pub fn new(render: RenderConfig, layout: LayoutConfig) -> Self {
        Self { render, layout }
    }

    fn connector(&self, c: &Connector) -> String {
        format!(
            r#"<path id="{}" d="{}" fill="none" stroke="{}" stroke-width="2" opacity="0.25" stroke-dasharray="4,4"/>"#,
            c.id,
            c.path_data(),
            c.color
        )
    }

    fn hub(&self, hub: &HubFrame) -> String {
        let r = hub.rect;
        let label = if hub.layer == 0 {
            "Root".to_string()
        } else {
            format!("Layer {}", hub.layer)
        };
        let sign = if hub.expanded { MINUS } else { '+' };
        let tx = r.width;
        let ty = r.height / 2.0;
        let radius = self.layout.toggle_radius;
        let color = hub.color;

        let parts = [
            format!(r#"<g id="{}" transform="translate({} {})">"#, hub.key, r.x, r.y),
            format!(
                r#"<rect width="{}" height="{}" rx="16" fill="{CARD_FILL}" stroke="{color}" stroke-width="2"/>"#,
                r.width, r.height
            ),
            format!(
                r#"<text x="70" y="55" fill="white" {} font-weight="bold">{}</text>"#,
                font(24),
                escape(&label)
            ),
            format!(
                r#"<text x="70" y="80" fill="{MUTED_TEXT}" {}>{} Accounts</text>"#,
                font(14),
                hub.account_count
            ),
            format!(
                r#"<g class="toggle" transform="translate({tx} {ty})"><circle r="{radius}" fill="{color}" stroke="{CARD_FILL}" stroke-width="2"/><text text-anchor="middle" dominant-baseline="central" fill="white" {}>{sign}</text></g>"#,
                font(16)
            ),
            "</g>".to_string(),
        ];
        parts.join("\n")
    }

    fn leaf(&self, leaf: &LeafFrame, color: &str) -> String {
        let r = leaf.rect;
        let stroke_width = if leaf.selected { 4 } else { 2 };
        let name = truncate_label(&leaf.id, self.render.max_label_chars);

        let mut parts = vec![
            format!(r#"<g id="{}" transform="translate({} {})">"#, leaf.key, r.x, r.y),
            format!(
                r#"<rect width="{}" height="{}" rx="12" fill="{CARD_FILL}" stroke="{color}" stroke-width="{stroke_width}"/>"#,
                r.width, r.height
            ),
            format!(
                r#"<rect width="{}" height="40" rx="12" fill="{color}" opacity="0.15"/>"#,
                r.width
            ),
            format!(r#"<rect x="15" y="10" width="50" height="20" rx="10" fill="{color}"/>"#),
            format!(
                r#"<text x="40" y="24" text-anchor="middle" fill="white" {} font-weight="bold">L{}</text>"#,
                font(11),
                leaf.layer
            ),
            format!(
                r#"<text x="75" y="25" fill="white" {} font-weight="bold">{}</text>"#,
                font(14),
                escape(&name)
            ),
        ];
        if let Some(state) = &leaf.state {
            parts.push(format!(
                r#"<text x="20" y="70" fill="{DETAIL_TEXT}" {}>{}</text>"#,
                font(12),
                escape(state)
            ));
        }
        if let Some(ifsc) = &leaf.ifsc_code {
            parts.push(format!(
                r#"<text x="20" y="95" fill="{DETAIL_TEXT}" {}>{}</text>"#,
                font(12),
                escape(ifsc)
            ));
        }
        parts.push("</g>".to_string());
        parts.join("\n")
    }
}

impl Renderer<FrameSnapshot> for SvgRenderer {
    fn render(&self, frame: &FrameSnapshot) -> String {
        let w = self.render.canvas_width;
        let h = self.render.canvas_height;
        let transform = frame.transform();

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            "<defs>".to_string(),
            r#"  <pattern id="dots" width="40" height="40" patternUnits="userSpaceOnUse">"#
                .to_string(),
            format!(r#"    <circle cx="1" cy="1" r="1" fill="{DOT_FILL}" opacity="0.3"/>"#),
            "  </pattern>".to_string(),
            "</defs>".to_string(),
            format!(r#"<rect width="{w}" height="{h}" fill="{BACKGROUND}"/>"#),
            format!(r#"<g transform="{transform}">"#),
            r#"<rect x="-5000" y="-5000" width="20000" height="20000" fill="url(#dots)"/>"#
                .to_string(),
        ];

        // Connectors behind cards.
        for c in &frame.connectors {
            parts.push(self.connector(c));
        }

        let colors: HashMap<i64, &str> = frame.hubs.iter().map(|h| (h.layer, h.color)).collect();
        for hub in &frame.hubs {
            parts.push(self.hub(hub));
        }
        for leaf in &frame.leaves {
            let color = colors.get(&leaf.layer).copied().unwrap_or(MUTED_TEXT);
            parts.push(self.leaf(leaf, color));
        }

        parts.push("</g>".to_string());
        parts.push("</svg>".to_string());
        let mut svg = parts.join("\n");
        svg.push('\n');
        svg
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
