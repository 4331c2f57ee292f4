//! Theme system - named color palettes for rendered cards.
//!
//! The palette table is built once and only ever read. Unknown theme names
//! resolve to the `default` palette itself, so a card rendered with an
//! unknown theme is byte-identical to one rendered with `"default"`.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::styles::{FontSizes, FontWeights, FONT_FAMILY};

/// Name of the palette used for unknown themes.
pub const DEFAULT_THEME: &str = "default";

/// Card color configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Card background
    pub background: String,
    /// Card outline stroke
    pub border: String,
    /// Card heading
    pub title_color: String,
    /// Dates, summaries and footer
    pub text_color: String,
    /// Article titles
    pub link_color: String,
    /// Row markers and heading dot
    pub accent: String,
}

impl Palette {
    fn new(
        background: &str,
        border: &str,
        title_color: &str,
        text_color: &str,
        link_color: &str,
        accent: &str,
    ) -> Self {
        Self {
            background: background.to_string(),
            border: border.to_string(),
            title_color: title_color.to_string(),
            text_color: text_color.to_string(),
            link_color: link_color.to_string(),
            accent: accent.to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        palette_for(DEFAULT_THEME).clone()
    }
}

lazy_static! {
    static ref THEMES: HashMap<&'static str, Palette> = {
        let mut m = HashMap::new();
        m.insert(
            DEFAULT_THEME,
            Palette::new("#ffffff", "#d1d5db", "#1f2937", "#374151", "#2563eb", "#3b82f6"),
        );
        m.insert(
            "dark",
            Palette::new("#0d1117", "#30363d", "#f0f6fc", "#8b949e", "#58a6ff", "#238636"),
        );
        m.insert(
            "radical",
            Palette::new("#141321", "#fff", "#fe428e", "#a9fef7", "#f8d847", "#fe428e"),
        );
        m.insert(
            "github",
            Palette::new("#ffffff", "#e1e4e8", "#24292e", "#586069", "#0366d6", "#28a745"),
        );
        m
    };
}

/// Look up a palette by theme name, falling back to [`DEFAULT_THEME`].
pub fn palette_for(theme: &str) -> &'static Palette {
    let themes: &'static HashMap<&'static str, Palette> = &THEMES;
    themes
        .get(theme)
        .unwrap_or_else(|| &themes[DEFAULT_THEME])
}

/// Names of all built-in themes, sorted.
pub fn theme_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = THEMES.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Build the `<defs><style>` block for a palette.
pub fn build_style_block(palette: &Palette) -> String {
    format!(
        r#"  <defs>
    <style>
      .title {{ font: {} {}px {}; fill: {}; }}
      .article-title {{ font: {} {}px {}; fill: {}; }}
      .article-date {{ font: {} {}px {}; fill: {}; }}
      .article-desc {{ font: {} {}px {}; fill: {}; }}
      .border {{ stroke: {}; stroke-width: 1; fill: {}; }}
    </style>
  </defs>"#,
        FontWeights::CARD_TITLE, FontSizes::CARD_TITLE, FONT_FAMILY, palette.title_color,
        FontWeights::ARTICLE_TITLE, FontSizes::ARTICLE_TITLE, FONT_FAMILY, palette.link_color,
        FontWeights::ARTICLE_DATE, FontSizes::ARTICLE_DATE, FONT_FAMILY, palette.text_color,
        FontWeights::ARTICLE_DESC, FontSizes::ARTICLE_DESC, FONT_FAMILY, palette.text_color,
        palette.border, palette.background,
    )
}

/// Build the SVG opening tag; the viewBox always matches width/height.
pub fn svg_open_tag(width: u32, height: u32) -> String {
    format!(
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
        w = width,
        h = height
    )
}
