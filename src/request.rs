//! Query-string parameters for a card request.
//!
//! Recognized keys: `feed_url`, `count`, `theme`, `title`, `width`,
//! `height`. Missing, empty or unparseable values take their defaults;
//! `width` and `height` must also be positive.

use thiserror::Error;

use crate::types::CardConfig;

pub const DEFAULT_COUNT: usize = 5;
pub const DEFAULT_TITLE: &str = "Latest Articles";
pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("feed_url parameter is required")]
    MissingFeedUrl,
}

/// A parsed card request: where to get the feed and how to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    pub feed_url: Option<String>,
    pub config: CardConfig,
}

impl CardRequest {
    /// Parse an `application/x-www-form-urlencoded` query, with or without
    /// the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut request = CardRequest {
            feed_url: None,
            config: CardConfig::default(),
        };

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match &*key {
                "feed_url" => request.feed_url = Some(value.to_string()),
                "count" => {
                    if let Ok(n) = value.parse::<usize>() {
                        request.config.max_articles = n;
                    }
                }
                "theme" => request.config.theme = value.to_string(),
                "title" => request.config.title = value.to_string(),
                "width" => {
                    if let Some(n) = parse_dimension(value) {
                        request.config.width = n;
                    }
                }
                "height" => {
                    if let Some(n) = parse_dimension(value) {
                        request.config.height = n;
                    }
                }
                _ => {}
            }
        }

        request
    }

    /// The feed location, or [`RequestError::MissingFeedUrl`].
    pub fn feed_url(&self) -> Result<&str, RequestError> {
        self.feed_url.as_deref().ok_or(RequestError::MissingFeedUrl)
    }
}

fn parse_dimension(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|n| *n > 0)
}
