//! Fixed-shape diagnostic card shown when no feed content is available.

use super::renderer::escape_xml;
use super::styles::FONT_FAMILY;
use super::theme::svg_open_tag;

/// Height of every error card (in px)
pub const ERROR_CARD_HEIGHT: u32 = 120;

/// Headline shown above the message
pub const ERROR_HEADLINE: &str = "Error loading RSS feed";

/// Error palette
pub struct ErrorColors;

impl ErrorColors {
    pub const BORDER: &'static str = "#ef4444";
    pub const BACKGROUND: &'static str = "#fef2f2";
    pub const HEADLINE: &'static str = "#dc2626";
    pub const MESSAGE: &'static str = "#991b1b";
}

/// Render a one-message error card `width` px wide.
pub fn render_error(message: &str, width: u32) -> String {
    let parts = [
        svg_open_tag(width, ERROR_CARD_HEIGHT),
        format!(
            r#"  <rect x="0.5" y="0.5" rx="4.5" height="99%" width="99%" stroke="{}" fill="{}"/>"#,
            ErrorColors::BORDER,
            ErrorColors::BACKGROUND
        ),
        format!(
            r#"  <text x="20" y="40" style="font: 600 16px {}" fill="{}">{}</text>"#,
            FONT_FAMILY,
            ErrorColors::HEADLINE,
            ERROR_HEADLINE
        ),
        format!(
            r#"  <text x="20" y="65" style="font: 400 12px {}" fill="{}">{}</text>"#,
            FONT_FAMILY,
            ErrorColors::MESSAGE,
            escape_xml(message)
        ),
        "</svg>".to_string(),
    ];
    parts.join("\n")
}
