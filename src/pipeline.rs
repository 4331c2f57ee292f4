//! Request handling: fetch, extract, render.
//!
//! Every outcome is a displayable card. A missing feed location or a failed
//! fetch produces an error card; a feed with no recognizable items produces
//! an empty but valid card.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::parser::extract_articles;
use crate::request::CardRequest;
use crate::svg::{render_card, render_error, ERROR_HEADLINE};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Cache policy for successfully rendered cards (30 minutes)
pub const CARD_CACHE_CONTROL: &str = "public, max-age=1800";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch feed: {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Retrieves raw feed text for a location.
pub trait FeedSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F> FeedSource for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

/// Reads feeds from the local file system. Accepts plain paths and
/// `file://` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FeedSource for FileSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let path = url.strip_prefix("file://").unwrap_or(url);
        Ok(fs::read_to_string(Path::new(path))?)
    }
}

/// A rendered card plus the metadata a transport needs to serve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub cache_control: Option<&'static str>,
    pub body: String,
}

impl CardResponse {
    fn card(body: String) -> Self {
        Self {
            status: 200,
            content_type: SVG_CONTENT_TYPE,
            cache_control: Some(CARD_CACHE_CONTROL),
            body,
        }
    }

    fn error(message: &str, width: u32) -> Self {
        Self {
            status: 400,
            content_type: SVG_CONTENT_TYPE,
            cache_control: None,
            body: render_error(message, width),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Serve one card request using `source` to retrieve the feed.
pub fn respond<S: FeedSource + ?Sized>(request: &CardRequest, source: &S) -> CardResponse {
    let config = &request.config;

    let feed_url = match request.feed_url() {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("{}", e);
            return CardResponse::error(&e.to_string(), config.width);
        }
    };

    let feed_text = match source.fetch(feed_url) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(feed_url, error = %e, "feed retrieval failed");
            return CardResponse::error(ERROR_HEADLINE, config.width);
        }
    };

    let articles = extract_articles(&feed_text, config.max_articles);
    let body = render_card(&articles, &config.theme, &config.title, config.width, config.height);
    tracing::info!(
        feed_url,
        articles = articles.len(),
        theme = %config.theme,
        bytes = body.len(),
        "rendered card"
    );
    CardResponse::card(body)
}
