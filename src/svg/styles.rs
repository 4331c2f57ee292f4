//! Font metrics, layout constants and text truncation.

/// Generic font stack; no external font resources are referenced.
pub const FONT_FAMILY: &str = "'Segoe UI', Ubuntu, Sans-Serif";

/// Appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Fixed font sizes used in the card (in px)
pub struct FontSizes;

impl FontSizes {
    pub const CARD_TITLE: u32 = 18;
    pub const ARTICLE_TITLE: u32 = 14;
    pub const ARTICLE_DATE: u32 = 12;
    pub const ARTICLE_DESC: u32 = 11;
}

/// Font weights used per element type
pub struct FontWeights;

impl FontWeights {
    pub const CARD_TITLE: u32 = 600;
    pub const ARTICLE_TITLE: u32 = 500;
    pub const ARTICLE_DATE: u32 = 400;
    pub const ARTICLE_DESC: u32 = 400;
}

/// Approximate average glyph widths (in px) used for truncation.
pub struct GlyphWidths;

impl GlyphWidths {
    pub const ARTICLE_TITLE: u32 = 8;
    pub const ARTICLE_DESC: u32 = 6;
}

/// Card geometry
pub struct Layout;

impl Layout {
    /// Height reserved for the heading, the row origin and the footer
    pub const BASE_OFFSET: u32 = 120;
    pub const ROW_HEIGHT: u32 = 45;
    /// Horizontal space not available to row text
    pub const TEXT_MARGIN: u32 = 60;
    pub const HEADER_X: u32 = 25;
    pub const HEADER_Y: u32 = 35;
    pub const ROWS_Y: u32 = 65;
    /// Footer is anchored this far from the right edge
    pub const FOOTER_INSET_X: u32 = 80;
    /// Footer is anchored this far from the bottom edge
    pub const FOOTER_INSET_Y: u32 = 20;
}

/// Canvas height: grows with the article count, never below `requested`.
pub fn card_height(requested: u32, article_count: usize) -> u32 {
    let rows = u32::try_from(article_count).unwrap_or(u32::MAX);
    let needed = Layout::ROW_HEIGHT
        .saturating_mul(rows)
        .saturating_add(Layout::BASE_OFFSET);
    requested.max(needed)
}

/// Number of characters that fit in a row of `width` px.
pub fn char_budget(width: u32, glyph_width: u32) -> usize {
    (width.saturating_sub(Layout::TEXT_MARGIN) / glyph_width) as usize
}

/// Hard cut at `max_chars` characters, with [`ELLIPSIS`] appended if cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}
