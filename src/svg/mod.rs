//! SVG card rendering.
//!
//! - Article cards (render_card)
//! - Error cards (render_error)
//!
//! Pure string building, no DOM manipulation.

mod date;
mod error_card;
mod renderer;
mod styles;
mod theme;

pub use date::{format_date, INVALID_DATE};
pub use error_card::{render_error, ERROR_CARD_HEIGHT, ERROR_HEADLINE};
pub use renderer::{escape_xml, render_card, FOOTER_LABEL};
pub use styles::{card_height, char_budget, truncate, GlyphWidths, Layout};
pub use theme::{palette_for, theme_names, Palette, DEFAULT_THEME};
