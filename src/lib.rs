//! rsscard - Render RSS and Atom feeds as self-contained SVG cards
//!
//! The pipeline has two stages. [`parser::extract_articles`] scans feed text
//! leniently and never fails, returning at most `max_count` articles.
//! [`svg::render_card`] lays those articles out on a themed card. A
//! separate [`svg::render_error`] draws a fixed diagnostic card for when no
//! feed could be obtained.
//!
//! # Example
//!
//! ```rust
//! use rsscard::{render_feed, CardConfig};
//!
//! let feed = "<rss><item><title>Hello</title><link>https://example.com</link></item></rss>";
//! let svg = render_feed(feed, &CardConfig::default());
//! assert!(svg.contains(">Hello</text>"));
//! ```
//!
//! # Themes
//!
//! - default
//! - dark
//! - radical
//! - github
//!
//! Any other name renders with `default`.

pub mod types;
pub mod parser;
pub mod svg;
pub mod request;
pub mod pipeline;

pub use types::*;
pub use parser::extract_articles;
pub use pipeline::{respond, CardResponse, FeedSource, FetchError, FileSource};
pub use request::{CardRequest, RequestError};
pub use svg::{render_card, render_error};

/// Extract articles from `feed_text` and render them with `config`.
///
/// # Example
/// ```rust
/// let config = rsscard::CardConfig { max_articles: 0, ..Default::default() };
/// let svg = rsscard::render_feed("<item><title>x</title></item>", &config);
/// assert!(!svg.contains(">x</text>"));
/// ```
pub fn render_feed(feed_text: &str, config: &CardConfig) -> String {
    let articles = extract_articles(feed_text, config.max_articles);
    render_card(&articles, &config.theme, &config.title, config.width, config.height)
}
