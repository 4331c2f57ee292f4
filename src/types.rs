//! Type definitions shared by the feed extractor and the card renderer

use serde::{Deserialize, Serialize};

use crate::request::{DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH};
use crate::svg::DEFAULT_THEME;

/// Title used when an item carries no usable `<title>`.
pub const UNTITLED: &str = "Untitled";

/// Link placeholder for items without an http(s) link.
pub const NO_LINK: &str = "#";

/// One article extracted from an `<item>` or `<entry>` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Decoded title, never empty
    pub title: String,
    /// Absolute http(s) URL, or [`NO_LINK`]
    pub link: String,
    /// Raw timestamp text as found in the feed (not guaranteed parseable)
    #[serde(rename = "pubDate")]
    pub published_at: String,
    /// Decoded summary with markup tags stripped; may be empty
    #[serde(rename = "contentSnippet")]
    pub summary: String,
}

/// Display configuration for one rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub theme: String,
    pub max_articles: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            theme: DEFAULT_THEME.to_string(),
            max_articles: DEFAULT_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CardConfig::default();
        assert_eq!(config.title, "Latest Articles");
        assert_eq!((config.width, config.height), (400, 200));
        assert_eq!(config.theme, "default");
        assert_eq!(config.max_articles, 5);
    }
}
