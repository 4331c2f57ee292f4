//! SVG renderer - converts a sequence of articles into a card.
//!
//! Pure string building. Layout, top to bottom: outline, heading, one
//! fixed-height row per article, footer label. Every string that came from
//! the feed or the caller goes through [`escape_xml`].

use super::date::format_date;
use super::styles::{card_height, char_budget, truncate, GlyphWidths, Layout};
use super::theme::{build_style_block, palette_for, svg_open_tag, Palette};
use crate::types::Article;

/// Fixed label in the bottom-right corner
pub const FOOTER_LABEL: &str = "via RSS";

/// Render articles as a themed SVG card.
///
/// `width` is used verbatim; the rendered height is `height` or larger if
/// the rows need more room.
pub fn render_card(articles: &[Article], theme: &str, title: &str, width: u32, height: u32) -> String {
    let palette = palette_for(theme);
    let canvas_height = card_height(height, articles.len());

    let mut parts: Vec<String> = Vec::new();

    parts.push(svg_open_tag(width, canvas_height));
    parts.push(build_style_block(palette));
    parts.push(r#"  <rect class="border" x="0.5" y="0.5" rx="4.5" height="99%" width="99%"/>"#.to_string());
    parts.push(render_heading(title, palette));

    parts.push(format!(r#"  <g transform="translate({}, {})">"#, Layout::HEADER_X, Layout::ROWS_Y));
    for (index, article) in articles.iter().enumerate() {
        parts.push(render_row(article, index, width, palette));
    }
    parts.push("  </g>".to_string());

    parts.push(render_footer(width, canvas_height));
    parts.push("</svg>".to_string());

    parts.join("\n")
}

fn render_heading(title: &str, palette: &Palette) -> String {
    format!(
        r#"  <g transform="translate({}, {})">
    <circle cx="6" cy="6" r="6" fill="{}"/>
    <text x="20" y="10" class="title">{}</text>
  </g>"#,
        Layout::HEADER_X,
        Layout::HEADER_Y,
        palette.accent,
        escape_xml(title)
    )
}

fn render_row(article: &Article, index: usize, width: u32, palette: &Palette) -> String {
    let y = index * Layout::ROW_HEIGHT as usize;
    let title = truncate(&article.title, char_budget(width, GlyphWidths::ARTICLE_TITLE));
    let date = format_date(&article.published_at);

    let mut row = format!(
        r#"    <g transform="translate(0, {})">
      <circle cx="4" cy="8" r="2" fill="{}" opacity="0.8"/>
      <text x="15" y="12" class="article-title">{}</text>
      <text x="15" y="28" class="article-date">{}</text>"#,
        y,
        palette.accent,
        escape_xml(&title),
        escape_xml(&date)
    );

    if !article.summary.is_empty() {
        let summary = truncate(&article.summary, char_budget(width, GlyphWidths::ARTICLE_DESC));
        row.push_str(&format!(
            "\n      <text x=\"15\" y=\"42\" class=\"article-desc\">{}</text>",
            escape_xml(&summary)
        ));
    }

    row.push_str("\n    </g>");
    row
}

fn render_footer(width: u32, canvas_height: u32) -> String {
    // Signed: very narrow cards push the label off the left edge.
    let x = i64::from(width) - i64::from(Layout::FOOTER_INSET_X);
    let y = i64::from(canvas_height) - i64::from(Layout::FOOTER_INSET_Y);
    format!(
        r#"  <g transform="translate({}, {})">
    <text x="0" y="0" class="article-date" opacity="0.6">{}</text>
  </g>"#,
        x, y, FOOTER_LABEL
    )
}

/// Escape the five XML-sensitive characters and drop characters XML 1.0
/// does not allow at all (C0 controls other than tab/LF/CR, U+FFFE, U+FFFF).
pub fn escape_xml(text: &str) -> String {
    let text: String = text.chars().filter(|c| is_xml_char(*c)).collect();
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => false,
        _ => true,
    }
}
